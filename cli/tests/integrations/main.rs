mod factor;
mod list;
mod server;
mod show;
mod solve;

use std::fs;
use tempfile::TempDir;

pub const WORKED: &str = r#"
puzzle worked
  a^2 * b * c^2 * g = 5100
  a * b^2 * e * f^2 = 33462
  a * c^2 * d^3 = 17150
  a^3 * b^3 * c * d * e^2 = 914760
  combined a^7 * b^6 * c^5 * d^4 * e^3 * f^2 * g = 2677277333530800000
"#;

/// Write `code` into a fresh workspace as `name`
pub fn workspace_with(name: &str, code: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(name), code).unwrap();
    temp_dir
}
