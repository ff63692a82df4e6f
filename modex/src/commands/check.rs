use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use modex_core::resolve_dest;
use modex_manifest::ModexToml;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to modex.toml (defaults to ./modex.toml)
    #[arg(short, long, default_value = "modex.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let modex_toml = ModexToml::open(&self.config).unwrap_or_exit();
        let manifest = modex_toml.manifest();

        println!("✓ {} is valid\n", self.config.display());

        let count = manifest.indexes.len();
        println!(
            "  {} index target{}:",
            count,
            if count == 1 { "" } else { "s" }
        );
        for target in &manifest.indexes {
            let dest = resolve_dest(target.dest.as_deref(), target.options.format);
            let sources: Vec<String> = target
                .sources
                .iter()
                .map(|source| source.display().to_string())
                .collect();
            println!("    {} <- {}", dest.display(), sources.join(", "));
        }

        Ok(())
    }
}
