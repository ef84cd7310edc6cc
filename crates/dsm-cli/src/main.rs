use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use dsm_core::WriteMode;

#[derive(Parser, Debug)]
#[command(
    name = "dsm-cli",
    about = "Migrate Datasheet Creator unit .ron files to the current schema",
    version
)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// List unit files found under a root
    Scan(ScanArgs),
    /// Apply the keyword substitution rules to every unit file under a root
    Upgrade(UpgradeArgs),
    /// Run the section migration over the named unit files
    Migrate(MigrateArgs),
    /// Zip every unit file under a root into a timestamped archive
    Backup(BackupArgs),
}

#[derive(ClapArgs, Debug)]
struct ScanArgs {
    /// Directory holding the unit folders (defaults to the current directory)
    root: Option<PathBuf>,
    /// How many directory levels below the root to expand
    #[arg(long, default_value_t = 2)]
    depth: usize,
    /// Print the result as a JSON array instead of one path per line
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(ClapArgs, Debug)]
struct UpgradeArgs {
    /// Directory holding the unit folders (defaults to the current directory)
    root: Option<PathBuf>,
    /// How many directory levels below the root to expand
    #[arg(long, default_value_t = 2)]
    depth: usize,
    /// Overwrite files directly instead of temp-file-and-rename
    #[arg(long, default_value_t = false)]
    in_place: bool,
    /// Zip all unit files next to the root before touching anything
    #[arg(long, default_value_t = false)]
    backup: bool,
}

#[derive(ClapArgs, Debug)]
struct MigrateArgs {
    /// Unit files to restructure
    #[arg(required = true)]
    files: Vec<PathBuf>,
    /// Overwrite files directly instead of temp-file-and-rename
    #[arg(long, default_value_t = false)]
    in_place: bool,
}

#[derive(ClapArgs, Debug)]
struct BackupArgs {
    /// Directory holding the unit folders (defaults to the current directory)
    root: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    match cli.cmd.unwrap_or(Cmd::Scan(ScanArgs {
        root: None,
        depth: 2,
        json: false,
    })) {
        Cmd::Scan(a) => cmd_scan(a),
        Cmd::Upgrade(a) => cmd_upgrade(a),
        Cmd::Migrate(a) => cmd_migrate(a),
        Cmd::Backup(a) => cmd_backup(a),
    }
}

fn write_mode(in_place: bool) -> WriteMode {
    if in_place {
        WriteMode::InPlace
    } else {
        WriteMode::Atomic
    }
}

fn cmd_scan(args: ScanArgs) {
    let root = args.root.unwrap_or_else(|| PathBuf::from("."));
    let files = dsm_core::find_unit_files(&root, args.depth).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(2);
    });
    if args.json {
        let paths: Vec<String> = files.iter().map(|p| p.display().to_string()).collect();
        println!("{}", serde_json::to_string_pretty(&paths).unwrap());
    } else {
        for f in files {
            println!("{}", f.display());
        }
    }
}

fn cmd_upgrade(args: UpgradeArgs) {
    let root = args.root.unwrap_or_else(|| PathBuf::from("."));
    let mode = write_mode(args.in_place);
    if args.backup {
        match dsm_core::backup::backup_unit_files(&root) {
            Ok(dest) => println!("backup written: {}", dest.display()),
            Err(e) => {
                eprintln!("backup error: {}", e);
                std::process::exit(2);
            }
        }
    }
    let files = dsm_core::find_unit_files(&root, args.depth).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(2);
    });
    let rules = dsm_core::migration_rules().unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(2);
    });
    for file in files {
        dsm_core::rewrite_unit_file(&file, &rules, mode).unwrap_or_else(|e| {
            eprintln!("error: {}", e);
            std::process::exit(3);
        });
        println!("updated {}", file.display());
    }
}

fn cmd_migrate(args: MigrateArgs) {
    let mode = write_mode(args.in_place);
    for file in &args.files {
        dsm_core::transform_unit_file(file, mode).unwrap_or_else(|e| {
            eprintln!("error: {}", e);
            std::process::exit(3);
        });
        println!("migrated {}", file.display());
    }
}

fn cmd_backup(args: BackupArgs) {
    let root = args.root.unwrap_or_else(|| PathBuf::from("."));
    match dsm_core::backup::backup_unit_files(&root) {
        Ok(dest) => println!("backup written: {}", dest.display()),
        Err(e) => {
            eprintln!("backup error: {}", e);
            std::process::exit(2);
        }
    }
}
