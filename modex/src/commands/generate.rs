use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use modex_codegen::{ModuleTree, render_index};
use modex_core::{Dialect, File, resolve_dest};
use modex_manifest::{IndexTarget, ModexToml};

use super::UnwrapOrExit;
use crate::scan::collect_module_paths;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to modex.toml (defaults to ./modex.toml)
    #[arg(short, long, default_value = "modex.toml")]
    pub config: PathBuf,

    /// Preview generated indexes without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Output format, overriding every target's setting
    #[arg(short, long)]
    pub format: Option<Dialect>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let modex_toml = ModexToml::open(&self.config).unwrap_or_exit();

        for target in &modex_toml.manifest().indexes {
            self.run_target(target)?;
        }

        Ok(())
    }

    fn run_target(&self, target: &IndexTarget) -> Result<()> {
        let mut options = target.options.clone();
        if let Some(format) = self.format {
            options.format = format;
        }

        let dest = resolve_dest(target.dest.as_deref(), options.format);
        let dest_dir = dest.parent().unwrap_or_else(|| Path::new(""));

        let paths = collect_module_paths(&target.sources, dest_dir);
        let tree = ModuleTree::build(&paths, &options);
        let content = render_index(&tree, &options);

        if self.dry_run {
            println!("── {} ──", dest.display());
            println!("{}", content);
            return Ok(());
        }

        File::new(&dest, content)
            .write()
            .wrap_err_with(|| format!("Failed to write '{}'", dest.display()))?;

        let count = tree.leaf_count();
        println!(
            "Indexed {} module{} into {}",
            count,
            if count == 1 { "" } else { "s" },
            dest.display()
        );

        Ok(())
    }
}
