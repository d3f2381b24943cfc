use std::fs;
use std::io;
use std::path::Path;

use sweepr_common::error::InputError;
use sweepr_common::probe::Address;

/// Reads `path` and returns one [`Address`] per non-blank line, in file order.
///
/// A missing file is [`InputError::FileNotFound`], a file without a single
/// usable line is [`InputError::EmptyInput`]. Everything else the filesystem
/// throws at us ends up in [`InputError::Io`].
pub fn load_addresses(path: impl AsRef<Path>) -> Result<Vec<Address>, InputError> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => InputError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => InputError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let addresses = parse_addresses(&contents);
    if addresses.is_empty() {
        return Err(InputError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    Ok(addresses)
}

/// Trims every line and drops the blank ones.
pub fn parse_addresses(contents: &str) -> Vec<Address> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Address::from)
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
