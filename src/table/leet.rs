use phf::{Map, phf_map};

/// Whole-word entries first, then one entry per letter.
pub(crate) static LEET: Map<&'static str, &'static [&'static str]> = phf_map! {
    "leet" => &["1337"],
    "the" => &["teh"],
    "cool" => &["kewl"],
    "dude" => &["d00d"],
    "you" => &["u"],
    "noob" => &["n00b"],
    "noobs" => &["n00bs"],
    "own" => &["pwn"],
    "owned" => &["pwned"],
    "rocks" => &["roxx0rs"],
    "exploits" => &["sploitz"],
    "woot" => &["w00t"],
    "hacker" => &["hax0r"],
    "hackers" => &["hax0rz"],

    "a" => &["4", "@"],
    "b" => &["8", "]3", "]8", "|3", "|8", "13"],
    "c" => &["(", "{"],
    "d" => &[")", "[}", "|)", "|}", "|>"],
    "e" => &["3"],
    "f" => &["|=", "ph"],
    "g" => &["6", "9", "&"],
    "h" => &["#", "|-|"],
    "i" => &["1", "!", "|"],
    "j" => &["_|", "u|"],
    "k" => &["|<", "|{"],
    "l" => &["|", "1", "|_"],
    "m" => &["/\\/\\", "|\\/|"],
    "n" => &["/\\/", "|\\|"],
    "o" => &["0", "()"],
    "p" => &["|D", "|*"],
    "q" => &["(,)", "O\\", "[]\\"],
    "r" => &["|2", "|?", "][2"],
    "s" => &["5", "$"],
    "t" => &["7", "+"],
    "u" => &["(_)", "|_|"],
    "v" => &["\\/", "\\\\//"],
    "w" => &["\\/\\/", "|/\\|", "VV"],
    "x" => &["><", "}{"],
    "y" => &["'/", "%"],
    "z" => &["2", "7_"],
};
