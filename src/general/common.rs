use std::fmt::Display;
use std::io::stdin;
use std::str::FromStr;

use num::PrimInt;

pub fn parse_int_from_str<T: PrimInt + FromStr>(as_str: &str, name: &str) -> Result<T, String> {
    // for some weird Rust reason, parse::<T>() returns a completely unbounded Err on failure,
    // so we just write the error message ourselves
    as_str
        .parse::<T>()
        .map_err(|_err| format!("couldn't parse {name} from '{as_str}'"))
}

pub fn parse_int<T: PrimInt + FromStr + Display>(
    word: Option<&str>,
    name: &str,
) -> Result<T, String> {
    parse_int_from_str(word.ok_or_else(|| format!("missing {name}"))?, name)
}

pub fn read_line_from_stdin() -> Result<String, String> {
    let mut s = String::default();
    let read = stdin().read_line(&mut s).map_err(|e| e.to_string())?;
    if read == 0 {
        return Err("reached end of input".to_string());
    }
    Ok(s)
}
