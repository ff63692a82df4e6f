use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use modex_core::File;

const STARTER_MANIFEST: &str = r#"# modex configuration
# Each [[index]] target aggregates sources into one generated index file.

[[index]]
sources = ["lib"]
dest = "lib/index.js"
format = "js"
path_prefix = "./"
"#;

#[derive(Args)]
pub struct InitCommand {
    /// Where to write the manifest (defaults to ./modex.toml)
    #[arg(default_value = "modex.toml")]
    pub path: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let file = File::new(&self.path, STARTER_MANIFEST);
        if file.exists() {
            eyre::bail!("'{}' already exists", self.path.display());
        }
        file.write()?;

        println!("Created {}", self.path.display());
        println!();
        println!("Next steps:");
        println!("  edit {} to point at your sources", self.path.display());
        println!("  modex generate");

        Ok(())
    }
}
