//! Where the numbers come from: typed values, a CSV line, or a generator.

use clap::{Args, ValueEnum};
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

/// Generated array shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ArrayKind {
    /// Uniform values in 1..1000
    Random,
    /// 1..=n
    Ascending,
    /// n..=1
    Descending,
    /// 1..=n with a few adjacent pairs swapped
    NearlySorted,
}

/// Input selection shared by `run` and `play`
#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Values separated by commas or whitespace, e.g. "5, 3 4"
    #[arg(long, conflicts_with = "file")]
    pub values: Option<String>,
    /// Read values from the first line of a CSV file
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Number of generated values
    #[arg(long, default_value_t = 20)]
    pub size: usize,
    /// Shape of the generated array
    #[arg(long, value_enum, default_value_t = ArrayKind::Random)]
    pub kind: ArrayKind,
    /// Generator seed
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

impl InputArgs {
    /// Produce the input sequence
    pub fn resolve(&self) -> Result<Vec<i64>> {
        if let Some(text) = &self.values {
            return Ok(parse_values(text)?);
        }
        if let Some(path) = &self.file {
            let text = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("reading {}", path.display()))?;
            let first = text.lines().next().unwrap_or_default();
            return parse_values(first).wrap_err_with(|| format!("parsing {}", path.display()));
        }
        Ok(generate(self.size, self.kind, self.seed))
    }
}

/// Rejected custom input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// A token that is not a whole number
    #[error("not an integer: {token:?}")]
    InvalidNumber {
        /// The offending token
        token: String,
    },
}

/// Split on commas and whitespace; integral decimals such as `4.0` are accepted
pub fn parse_values(text: &str) -> Result<Vec<i64>, InputError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_token)
        .collect()
}

fn parse_token(token: &str) -> Result<i64, InputError> {
    if let Ok(value) = token.parse::<i64>() {
        return Ok(value);
    }
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 => Ok(value as i64),
        _ => Err(InputError::InvalidNumber {
            token: token.to_string(),
        }),
    }
}

/// Deterministic array of `size` values
pub fn generate(size: usize, kind: ArrayKind, seed: u64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let ascending = || (1..=size as i64).collect::<Vec<_>>();
    match kind {
        ArrayKind::Random => (0..size).map(|_| rng.gen_range(1..1000)).collect(),
        ArrayKind::Ascending => ascending(),
        ArrayKind::Descending => (1..=size as i64).rev().collect(),
        ArrayKind::NearlySorted => {
            let mut arr = ascending();
            if size >= 2 {
                for _ in 0..(size / 20).max(1) {
                    let i = rng.gen_range(0..size - 1);
                    arr.swap(i, i + 1);
                }
            }
            arr
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_separators() {
        assert_eq!(parse_values("5, 3 4,\n-1").unwrap(), vec![5, 3, 4, -1]);
        assert_eq!(parse_values("  ").unwrap(), Vec::<i64>::new());
        assert_eq!(parse_values("7.0,2").unwrap(), vec![7, 2]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            parse_values("1, two, 3").unwrap_err(),
            InputError::InvalidNumber {
                token: "two".to_string()
            }
        );
        assert!(parse_values("2.5").is_err());
    }

    #[test]
    fn test_generate_shapes() {
        assert_eq!(generate(4, ArrayKind::Ascending, 0), vec![1, 2, 3, 4]);
        assert_eq!(generate(4, ArrayKind::Descending, 0), vec![4, 3, 2, 1]);
        let random = generate(50, ArrayKind::Random, 9);
        assert_eq!(random.len(), 50);
        assert!(random.iter().all(|v| (1..1000).contains(v)));
        assert_eq!(random, generate(50, ArrayKind::Random, 9));
    }

    #[test]
    fn test_nearly_sorted_is_close() {
        let arr = generate(40, ArrayKind::NearlySorted, 3);
        let mut sorted = arr.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=40).collect::<Vec<_>>());
        let displaced = arr.iter().zip(&sorted).filter(|(a, b)| a != b).count();
        assert!(displaced <= 4);
        assert_eq!(generate(1, ArrayKind::NearlySorted, 3), vec![1]);
        assert!(generate(0, ArrayKind::NearlySorted, 3).is_empty());
    }

    #[test]
    fn test_resolve_reads_csv_first_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.csv");
        std::fs::write(&path, "9,8 7\n1,2,3\n").unwrap();
        let args = InputArgs {
            values: None,
            file: Some(path),
            size: 20,
            kind: ArrayKind::Random,
            seed: 42,
        };
        assert_eq!(args.resolve().unwrap(), vec![9, 8, 7]);
    }
}
