use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
                 ____ _      _____ ___ ___  ___
                / __/| | /| / / __/ __/ _ \/ _ \
               _\ \  | |/ |/ / _// _// ___/ , _/
              /___/  |__/|__/___/___/_/  /_/|_|
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.bright_green()));
}
