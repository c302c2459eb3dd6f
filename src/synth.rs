//! Test waveform generator.
//!
//! Produces a half-sine / half-square signal centred on an ADC mid-scale
//! level, a noisy copy of it, and writes both as hex-encoded text files the
//! loader reads back as its two fixed sources.

use std::f64::consts::PI;
use std::io::Write;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SynthConfig;

/// Integer ADC codes of the generated captures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Waveform {
    pub noisy: Vec<u32>,
    pub clean: Vec<u32>,
}

/// `n` evenly spaced points over `[start, end]`, both ends included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// The noiseless signal around zero: sine for the first half, square after.
pub fn base_signal(cfg: &SynthConfig) -> Vec<f64> {
    let half = cfg.num_samples / 2;
    linspace(0.0, 4.0 * PI, cfg.num_samples)
        .into_iter()
        .enumerate()
        .map(|(i, t)| {
            let s = t.sin();
            if i < half {
                s * cfg.amplitude
            } else {
                sign(s) * cfg.amplitude
            }
        })
        .collect()
}

/// One draw from N(0, sigma) via Box–Muller.
fn gaussian<R: Rng>(rng: &mut R, sigma: f64) -> f64 {
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen();
    sigma * (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// Clip to the ADC range and truncate to an integer code.
fn to_code(v: f64, adc_max: u32) -> u32 {
    v.clamp(0.0, adc_max as f64) as u32
}

pub fn synthesize_with<R: Rng>(cfg: &SynthConfig, rng: &mut R) -> Waveform {
    let signal = base_signal(cfg);
    let noisy = signal
        .iter()
        .map(|&s| to_code(s + gaussian(rng, cfg.noise_level) + cfg.offset, cfg.adc_max))
        .collect();
    let clean = signal
        .iter()
        .map(|&s| to_code(s + cfg.offset, cfg.adc_max))
        .collect();
    Waveform { noisy, clean }
}

/// Generate with the configured seed, or OS entropy if none.
pub fn synthesize(cfg: &SynthConfig) -> Waveform {
    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    synthesize_with(cfg, &mut rng)
}

/// One upper-case hex value per line, no prefix.
pub fn write_hex<W: Write>(w: &mut W, codes: &[u32]) -> std::io::Result<()> {
    for c in codes {
        writeln!(w, "{c:X}")?;
    }
    Ok(())
}

pub fn save_hex<P: AsRef<Path>>(path: P, codes: &[u32]) -> std::io::Result<()> {
    let mut f = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_hex(&mut f, codes)?;
    f.flush()
}

/// Write both captures to the paths in `cfg`.
pub fn save_waveform(cfg: &SynthConfig, wave: &Waveform) -> std::io::Result<()> {
    save_hex(&cfg.noisy_path, &wave.noisy)?;
    save_hex(&cfg.clean_path, &wave.clean)?;
    log::info!(
        "Wrote {} samples to {} and {}",
        wave.noisy.len(),
        cfg.noisy_path.display(),
        cfg.clean_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_both_ends() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
    }

    #[test]
    fn second_half_is_square() {
        let cfg = SynthConfig::default();
        let s = base_signal(&cfg);
        assert_eq!(s.len(), 100);
        for v in &s[50..] {
            assert!(v.abs() == 1000.0 || *v == 0.0, "{v}");
        }
        assert!(s[..50].iter().any(|v| v.abs() < 999.0));
    }

    #[test]
    fn codes_are_clipped() {
        assert_eq!(to_code(-20.0, 4095), 0);
        assert_eq!(to_code(5000.0, 4095), 4095);
        assert_eq!(to_code(2048.9, 4095), 2048);
    }
}
