use clap::{ArgAction, CommandFactory, Parser};
use std::ffi::OsString;
use std::time::Duration;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "progresstest",
    version,
    about = "Emit synthetic progress output on stderr",
    disable_help_flag = true
)]
pub struct Config {
    /// Print help
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub help: bool,

    /// Update progress inplace
    #[arg(short = 'I', long)]
    pub inplace: bool,

    /// Print a multiline banner before the progress
    #[arg(short, long)]
    pub multiline: bool,

    /// Progress count
    #[arg(short, long, value_name = "COUNT", default_value_t = 10)]
    pub count: u64,

    /// Progress interval in milliseconds
    #[arg(short, long, value_name = "INTERVAL", default_value_t = 100)]
    pub interval: u64,
}

/// What the emitter needs from the command line, detached from clap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmitterOptions {
    pub inplace: bool,
    pub multiline: bool,
    pub count: u64,
    pub interval: Duration,
}

impl Default for EmitterOptions {
    fn default() -> Self {
        Self {
            inplace: false,
            multiline: false,
            count: 10,
            interval: Duration::from_millis(100),
        }
    }
}

impl From<&Config> for EmitterOptions {
    fn from(config: &Config) -> Self {
        Self {
            inplace: config.inplace,
            multiline: config.multiline,
            count: config.count,
            interval: Duration::from_millis(config.interval),
        }
    }
}

/// Raw process arguments reduced to the flags `Config` understands.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Program name followed by recognized flags, in `--long[=value]` form.
    pub args: Vec<String>,
    /// `-h`/`--help` was seen as a flag, whatever else was supplied.
    pub help: bool,
}

struct FlagSpec {
    long: String,
    short: Option<char>,
    takes_value: bool,
}

fn flag_specs() -> Vec<FlagSpec> {
    let mut cmd = Config::command();
    // pulls in the generated --version flag
    cmd.build();
    cmd.get_arguments()
        .filter_map(|arg| {
            Some(FlagSpec {
                long: arg.get_long()?.to_string(),
                short: arg.get_short(),
                takes_value: arg.get_action().takes_values(),
            })
        })
        .collect()
}

impl Invocation {
    /// Walk the raw arguments, keeping known flags and dropping everything
    /// else. Values are left unchecked so clap still validates them.
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let specs = flag_specs();
        let mut raw = args
            .into_iter()
            .map(|arg| Into::<OsString>::into(arg).to_string_lossy().into_owned());
        let mut invocation = Invocation {
            args: raw.next().into_iter().collect(),
            help: false,
        };

        while let Some(arg) = raw.next() {
            if arg == "--" {
                break;
            }
            if let Some(body) = arg.strip_prefix("--") {
                let (name, value) = match body.split_once('=') {
                    Some((name, value)) => (name, Some(value.to_string())),
                    None => (body, None),
                };
                match specs.iter().find(|spec| spec.long == name) {
                    Some(spec) => invocation.push(spec, value, &mut raw),
                    None => debug!(%arg, "ignoring unrecognized flag"),
                }
            } else if let Some(cluster) = arg.strip_prefix('-').filter(|c| !c.is_empty()) {
                for (i, ch) in cluster.char_indices() {
                    let Some(spec) = specs.iter().find(|spec| spec.short == Some(ch)) else {
                        debug!(flag = %ch, "ignoring unrecognized short flag");
                        continue;
                    };
                    if spec.takes_value {
                        // -c5 carries its value inline
                        let rest = &cluster[i + ch.len_utf8()..];
                        let value = (!rest.is_empty()).then(|| rest.to_string());
                        invocation.push(spec, value, &mut raw);
                        break;
                    }
                    invocation.push(spec, None, &mut raw);
                }
            } else {
                debug!(%arg, "ignoring positional argument");
            }
        }

        invocation
    }

    fn push(&mut self, spec: &FlagSpec, value: Option<String>, raw: &mut impl Iterator<Item = String>) {
        if spec.long == "help" {
            self.help = true;
        }
        let value = if spec.takes_value {
            value.or_else(|| raw.next())
        } else {
            value
        };
        self.args.push(match value {
            Some(value) => format!("--{}={value}", spec.long),
            None => format!("--{}", spec.long),
        });
    }
}
