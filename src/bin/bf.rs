//! Command-line interface for bf
//! This binary checks definition files and generates node graphs from them.
//!
//! Usage:
//!   bf check `<path>`                                  - Validate a definition file
//!   bf generate `<path>` [--root `<name>`] [--seed `<n>`] - Generate graphs from a definition
//!   bf dump `<path>` [--format bf|yaml|json]           - Print the parsed definition
//!   bf contexts `<path>`                               - Print where each statement is referenced
//!   bf list-formats                                  - List available graph output formats

use bf::bf::config::{BfConfig, Loader};
use bf::bf::formats::FormatRegistry;
use bf::bf::{parse_definition, Definition, Generator, RandomStrategy};
use clap::{value_parser, Arg, ArgMatches, Command};

const USER_CONFIG_FILE: &str = "bf.toml";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = Command::new("bf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate structured test inputs from bf definitions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("check")
                .about("Validate a definition file")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate node graphs from a definition")
                .arg(path_arg())
                .arg(
                    Arg::new("root")
                        .long("root")
                        .short('r')
                        .help("Statement to generate from (defaults to the first unreferenced statement)"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .short('s')
                        .help("RNG seed, overrides the configured one")
                        .value_parser(value_parser!(u64)),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the defaults"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (see list-formats)")
                        .default_value("treeviz"),
                )
                .arg(
                    Arg::new("count")
                        .long("count")
                        .short('n')
                        .help("Number of graphs to generate")
                        .value_parser(value_parser!(usize))
                        .default_value("1"),
                ),
        )
        .subcommand(
            Command::new("dump")
                .about("Print the parsed definition")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(["bf", "yaml", "json"])
                        .default_value("bf"),
                ),
        )
        .subcommand(
            Command::new("contexts")
                .about("Print the statements referencing each statement")
                .arg(path_arg()),
        )
        .subcommand(Command::new("list-formats").about("List available graph output formats"))
        .get_matches();

    let result = match matches.subcommand() {
        Some(("check", sub)) => handle_check_command(sub),
        Some(("generate", sub)) => handle_generate_command(sub),
        Some(("dump", sub)) => handle_dump_command(sub),
        Some(("contexts", sub)) => handle_contexts_command(sub),
        Some(("list-formats", _)) => {
            handle_list_formats_command();
            Ok(())
        }
        _ => unreachable!(),
    };

    if let Err(message) = result {
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the definition file")
        .required(true)
        .index(1)
}

fn string_arg<'a>(matches: &'a ArgMatches, name: &str) -> Option<&'a str> {
    matches.get_one::<String>(name).map(String::as_str)
}

fn load_definition(matches: &ArgMatches) -> Result<Definition, String> {
    let path = string_arg(matches, "path").unwrap_or_default();
    let source =
        std::fs::read_to_string(path).map_err(|e| format!("reading {}: {}", path, e))?;
    parse_definition(&source, path).map_err(|e| e.to_string())
}

fn load_config(path: Option<&str>) -> Result<BfConfig, String> {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(USER_CONFIG_FILE),
    };
    loader.build().map_err(|e| format!("loading configuration: {}", e))
}

fn handle_check_command(matches: &ArgMatches) -> Result<(), String> {
    let definition = load_definition(matches)?;
    let roots: Vec<&str> = definition.roots().map(|statement| statement.name()).collect();
    println!("ok: {} statements", definition.len());
    if !roots.is_empty() {
        println!("roots: {}", roots.join(", "));
    }
    Ok(())
}

fn handle_generate_command(matches: &ArgMatches) -> Result<(), String> {
    let definition = load_definition(matches)?;

    let mut config = load_config(string_arg(matches, "config"))?;
    if let Some(seed) = matches.get_one::<u64>("seed") {
        config.generation.seed = Some(*seed);
    }

    let root = match string_arg(matches, "root") {
        Some(root) => root.to_string(),
        None => definition
            .roots()
            .next()
            .map(|statement| statement.name().to_string())
            .ok_or("every statement is referenced; pass --root")?,
    };

    let registry = FormatRegistry::with_defaults();
    let format = string_arg(matches, "format").unwrap_or("treeviz");
    let formatter = registry
        .get(format)
        .ok_or_else(|| format!("Format '{}' not found", format))?;
    let count = matches.get_one::<usize>("count").copied().unwrap_or(1);

    let mut generator = Generator::new(&definition, RandomStrategy::new(config.generation));
    for i in 0..count {
        let graph = generator.generate(&root).map_err(|e| e.to_string())?;
        let output = formatter.serialize(&graph).map_err(|e| e.to_string())?;
        if i > 0 {
            println!();
        }
        print!("{}", output);
        if !output.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}

fn handle_dump_command(matches: &ArgMatches) -> Result<(), String> {
    let definition = load_definition(matches)?;
    let output = match string_arg(matches, "format").unwrap_or("bf") {
        "yaml" => serde_yaml::to_string(&definition).map_err(|e| e.to_string())?,
        "json" => {
            let mut json = serde_json::to_string_pretty(&definition).map_err(|e| e.to_string())?;
            json.push('\n');
            json
        }
        _ => definition.to_string(),
    };
    print!("{}", output);
    Ok(())
}

fn handle_contexts_command(matches: &ArgMatches) -> Result<(), String> {
    let definition = load_definition(matches)?;
    for (name, parents) in definition.contexts().iter() {
        let sites: Vec<String> = parents
            .iter()
            .map(|(parent, ref_types)| {
                let tags: String = ref_types.iter().map(|t| t.tag()).collect();
                format!("{} [{}]", parent, tags)
            })
            .collect();
        println!("{} <- {}", name, sites.join(", "));
    }
    Ok(())
}

fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");
    for name in registry.list_formats() {
        let description = registry
            .get(&name)
            .map(|formatter| formatter.description())
            .unwrap_or_default();
        println!("  {}", name);
        println!("    {}", description);
    }
}
