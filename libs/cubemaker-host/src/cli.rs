//! Command line flags of the `cubemaker` binary.

use config::constants::NodeParams;

use crate::error::{HostError, HostResult};

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub params: NodeParams,
    pub parallel: bool,
}

impl CliArgs {
    /// Parses flags, skipping the program name.
    ///
    /// ```text
    /// --location <path>   default /root/world/geo/cubeMaker
    /// --count <n>         default 20
    /// --max-rotation <d>  enables rotation
    /// --parallel          cook each level with rayon
    /// ```
    pub fn parse<I>(args: I) -> HostResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let defaults = NodeParams::default();
        let mut location = defaults.location;
        let mut number_of_cubes = defaults.number_of_cubes;
        let mut rotate_cubes = defaults.rotate_cubes;
        let mut max_rotation = defaults.max_rotation;
        let mut parallel = false;

        let mut args = args.into_iter().skip(1);
        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--location" => location = value_of(&flag, args.next())?,
                "--count" => number_of_cubes = parse_value(&flag, args.next())?,
                "--max-rotation" => {
                    max_rotation = parse_value(&flag, args.next())?;
                    rotate_cubes = true;
                }
                "--parallel" => parallel = true,
                other => return Err(HostError::InvalidArgument(format!("unknown flag {other}"))),
            }
        }

        let params = NodeParams::new(location, number_of_cubes, rotate_cubes, max_rotation)
            .map_err(|err| HostError::InvalidArgument(err.to_string()))?;
        Ok(Self { params, parallel })
    }
}

fn value_of(flag: &str, value: Option<String>) -> HostResult<String> {
    value.ok_or_else(|| HostError::InvalidArgument(format!("{flag} needs a value")))
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> HostResult<T> {
    let value = value_of(flag, value)?;
    value
        .parse()
        .map_err(|_| HostError::InvalidArgument(format!("{flag}: cannot parse '{value}'")))
}
