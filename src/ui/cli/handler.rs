// Wed Jan 15 2026 - Alex

use super::args::{Args, BuildArgs, Command, ScanArgs, SourceArgs};
use crate::config::ChainConfig;
use crate::jumptable::JumpTableBuilder;
use crate::memory::{Address, MemoryReader, MmapMemory};
use crate::pattern::find_preamble;
use crate::symbol::{AddressResolver, BinarySymbols};
use crate::ui::display::DisplayRenderer;
use colored::Colorize;
use std::fs;

pub struct CommandHandler {
    use_color: bool,
    quiet: bool,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self {
            use_color: true,
            quiet: false,
        }
    }

    pub fn execute(mut self, args: Args) -> anyhow::Result<()> {
        self.setup_logging(&args)?;

        self.quiet = args.quiet;
        if args.no_color {
            self.use_color = false;
            colored::control::set_override(false);
        }

        match args.command {
            Command::Build(build_args) => self.handle_build(build_args),
            Command::Scan(scan_args) => self.handle_scan(scan_args),
        }
    }

    fn setup_logging(&self, args: &Args) -> anyhow::Result<()> {
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            "off" => log::LevelFilter::Off,
            _ => log::LevelFilter::Info,
        };

        let installed = env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .try_init();
        if installed.is_err() {
            log::debug!("logger already initialised");
        }

        Ok(())
    }

    fn handle_build(&self, args: BuildArgs) -> anyhow::Result<()> {
        args.source.validate().map_err(|e| anyhow::anyhow!(e))?;

        let mut config = load_config(&args.source)?;
        if let Some(count) = args.count {
            config = config.with_branch_count(count);
        }

        let (reader, entry) = open_source(&args.source)?;
        let builder = JumpTableBuilder::from_config(&config)?;
        let table = builder.build(reader.as_ref(), entry)?;

        if !self.quiet {
            let renderer = DisplayRenderer::new().with_color(self.use_color);
            print!("{}", renderer.render_table(&table));
        }

        if let Some(output) = &args.output {
            fs::write(output, table.to_json()?)?;
            if !self.quiet {
                println!("{}", format!("Table written to: {:?}", output).green());
            }
        }

        Ok(())
    }

    fn handle_scan(&self, args: ScanArgs) -> anyhow::Result<()> {
        args.source.validate().map_err(|e| anyhow::anyhow!(e))?;

        let config = load_config(&args.source)?;
        let anchor = config.anchor_pattern()?;
        let (reader, entry) = open_source(&args.source)?;

        let offset = find_preamble(reader.as_ref(), entry, &anchor, config.scan_limit)?;

        if !self.quiet {
            println!(
                "{} {} at {} (fn+0x{:x})",
                "[+]".green(),
                anchor,
                entry + offset as u64,
                offset
            );
        }

        Ok(())
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn load_config(source: &SourceArgs) -> anyhow::Result<ChainConfig> {
    let mut config = match &source.config {
        Some(path) => ChainConfig::load(path)?,
        None => ChainConfig::default(),
    };
    if let Some(anchor) = &source.anchor {
        config = config.with_anchor(anchor);
    }
    if let Some(limit) = source.scan_limit {
        config = config.with_scan_limit(limit);
    }
    config.validate().map_err(|e| anyhow::anyhow!(e))?;
    Ok(config)
}

fn open_source(source: &SourceArgs) -> anyhow::Result<(Box<dyn MemoryReader>, Address)> {
    if let (Some(binary), Some(symbol)) = (&source.binary, &source.symbol) {
        let symbols = BinarySymbols::load(binary)?;
        let entry = symbols.resolve(symbol)?;
        let base = symbols.load_base(symbol)?;
        log::info!("resolved {} to {} in {:?}", symbol, entry, binary);
        let reader = MmapMemory::from_file(binary, base)?;
        return Ok((Box::new(reader), entry));
    }

    match (&source.raw, source.base) {
        (Some(raw), Some(base)) => {
            let base = Address::new(base);
            let reader = MmapMemory::from_file(raw, base)?;
            Ok((Box::new(reader), base))
        }
        _ => Err(anyhow::anyhow!("No code source specified")),
    }
}
