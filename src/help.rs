use std::io::{self, Write};

const FLAGS: &[(&str, &str)] = &[
    ("-h, --help", "Print help"),
    ("-I, --inplace", "Update progress inplace"),
    ("-m, --multiline", "Print a multiline banner before the progress"),
    ("-c, --count=COUNT", "Progress count (default: 10)"),
    ("-i, --interval=INTERVAL", "Progress interval in milliseconds (default: 100)"),
    ("-V, --version", "Print version"),
];

pub fn render(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Usage: progresstest [OPTIONS]")?;
    writeln!(out)?;
    writeln!(out, "Options:")?;
    let width = FLAGS.iter().map(|(flag, _)| flag.len()).max().unwrap_or(0);
    for (flag, description) in FLAGS {
        key_line(out, flag, description, width)?;
    }
    out.flush()
}

fn key_line(out: &mut impl Write, flag: &str, description: &str, width: usize) -> io::Result<()> {
    writeln!(out, "  {flag:<width$}  {description}")
}
