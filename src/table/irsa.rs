use phf::{Map, phf_map};

pub(crate) static IRSA: Map<char, &'static str> = phf_map! {
    ' ' => " | ",
    'a' => "alfa",
    'b' => "bravo",
    'c' => "charlie",
    'd' => "delta",
    'e' => "echo",
    'f' => "foxtrot",
    'g' => "golf",
    'h' => "hotel",
    'i' => "india",
    'j' => "juliet",
    'k' => "kilo",
    'l' => "lima",
    'm' => "mike",
    'n' => "november",
    'o' => "oscar",
    'p' => "papa",
    'q' => "quebec",
    'r' => "romeo",
    's' => "sierra",
    't' => "tango",
    'u' => "uniform",
    'v' => "victor",
    'w' => "whiskey",
    'x' => "x-ray",
    'y' => "yankee",
    'z' => "zulu",
};
