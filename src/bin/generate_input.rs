//! Writes the noisy and clean hex-encoded test inputs.

use sigview::config::{SynthConfig, CONFIG_FILE};
use sigview::synth;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = SynthConfig::load_or_default(CONFIG_FILE)?;
    let wave = synth::synthesize(&cfg);
    synth::save_waveform(&cfg, &wave)?;
    Ok(())
}
