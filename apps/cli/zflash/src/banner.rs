use std::io::Write;

const RED: &str = "\x1b[1;31m";
const YELLOW: &str = "\x1b[1;33m";
const GREEN: &str = "\x1b[1;32m";
const CYAN: &str = "\x1b[1;36m";
const BLUE: &str = "\x1b[1;34m";
const RESET: &str = "\x1b[0m";

const BANNER: [(&str, &str); 5] = [
    (RED, r" ______     __         ______     __         ______     __  __    "),
    (YELLOW, r"/\___  \   /\ \       /\  ___\   /\ \       /\  ___\   /\ \_\ \   "),
    (GREEN, r"\/_/  /_   \ \ \____  \ \ \__ \  \ \ \____  \ \___  \  \ \  __ \  "),
    (CYAN, r"  /\_____\  \ \_____\  \ \_____\  \ \_____\  \/\_____\  \ \_\ \_\ "),
    (BLUE, r"  \/_____/   \/_____/   \/_____/   \/_____/   \/_____/   \/_/\/_/ "),
];

pub fn write_banner<W: Write>(out: &mut W) -> std::io::Result<()> {
    for (color, line) in BANNER {
        writeln!(out, "{color}{line}")?;
    }
    write!(out, "{RESET}")?;
    out.flush()
}
