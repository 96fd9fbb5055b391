use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;

use impactsim::{
    cities, engine,
    generator::AsteroidSampler,
    report,
    scenario::ScenarioLoader,
    web::{self, WebServerConfig},
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Asteroid impact assessment runner")]
struct Cli {
    /// Path to a scenario YAML file
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Target city from the reference table (ignored when --scenario is set)
    #[arg(long, default_value = "New York")]
    city: String,

    /// Seed for the demo asteroid sampler (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the assessment as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Serve the interactive viewer instead of printing a report
    #[arg(long)]
    serve: bool,

    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    #[arg(long, default_value_t = 8080)]
    port: u16,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.serve {
        let runtime = tokio::runtime::Runtime::new()?;
        return runtime.block_on(web::run(WebServerConfig {
            host: cli.host,
            port: cli.port,
        }));
    }

    let (label, asteroid, city) = match &cli.scenario {
        Some(path) => {
            let loader = ScenarioLoader::new(".");
            let scenario = loader.load(path)?;
            let city = scenario.city()?;
            (scenario.name.clone(), scenario.asteroid(), city)
        }
        None => {
            let city = cities::find(&cli.city)
                .ok_or_else(|| anyhow!("unknown city '{}'", cli.city))?;
            let mut sampler = match cli.seed {
                Some(seed) => AsteroidSampler::from_seed(seed),
                None => AsteroidSampler::from_entropy(),
            };
            (format!("{} strike", city.name), sampler.sample(), city)
        }
    };

    let assessment = engine::assess(&asteroid, &city);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        print!("{}", report::render(&label, &asteroid, &city, &assessment));
    }
    Ok(())
}
