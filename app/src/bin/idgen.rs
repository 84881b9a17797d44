use anyhow::Result;
use structopt::StructOpt;

use infra::ids::{Id, IdGen};
use pizzeria::menu::{Category, Pizza};

#[derive(Debug, StructOpt)]
#[structopt(name = "idgen", about = "Generate Identifiers")]
enum Commands {
    #[structopt(name = "gen", about = "Generate Identifiers")]
    Generate(Generate),
    #[structopt(name = "hash", about = "Derive identifiers from catalog slugs")]
    Hash(Hash),
}

#[derive(Debug, StructOpt)]
struct Generate {
    #[structopt(short = "n", long = "count", default_value = "1")]
    count: usize,
    /// Mint category ids instead of pizza ids.
    #[structopt(long = "category")]
    category: bool,
}

#[derive(Debug, StructOpt)]
struct Hash {
    /// Hash as category slugs instead of pizza slugs.
    #[structopt(long = "category")]
    category: bool,
    inputs: Vec<String>,
}

fn main() -> Result<()> {
    let cmd = Commands::from_args();

    match cmd {
        Commands::Generate(opt) => {
            let idgen = IdGen::new();
            for _ in 0..opt.count {
                if opt.category {
                    println!("{}", idgen.generate::<Category>());
                } else {
                    println!("{}", idgen.generate::<Pizza>());
                }
            }
        }
        Commands::Hash(opt) => {
            for inp in opt.inputs.iter() {
                if opt.category {
                    println!("{}", Id::<Category>::hashed(inp));
                } else {
                    println!("{}", Id::<Pizza>::hashed(inp));
                }
            }
        }
    }

    Ok(())
}
