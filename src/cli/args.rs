use std::path::PathBuf;

use clap::Parser;

use crate::inventory::DEFAULT_DATA_FILE;

/// Command-line arguments of the `product-inventory` binary.
#[derive(Debug, Parser)]
#[command(name = "product-inventory")]
#[command(about = "Interactive product inventory backed by a JSON file")]
pub struct Cli {
    /// JSON file holding the inventory. Created on the first save.
    #[arg(long, short, default_value = DEFAULT_DATA_FILE)]
    pub file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_defaults_to_productos_json() {
        let cli = Cli::try_parse_from(["product-inventory"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("productos.json"));
    }

    #[test]
    fn test_file_flag() {
        let cli = Cli::try_parse_from(["product-inventory", "--file", "/tmp/stock.json"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("/tmp/stock.json"));

        let cli = Cli::try_parse_from(["product-inventory", "-f", "a.json"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("a.json"));
    }
}
