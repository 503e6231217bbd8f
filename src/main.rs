use argh::FromArgs;
use std::error::Error;
use std::path::PathBuf;

use flexframe::frame::{FrameGenerator, FrameProperties, USER_HEADER_LEN};
use flexframe::modem::ModulationScheme;
use flexframe::wav::IqWriter;

#[macro_use]
extern crate nolog;

const DEFAULT_OUTPUT_FILE: &str = "frame.wav";
const DEFAULT_SAMPLE_RATE: u32 = 48000;

#[derive(FromArgs)]
#[argh(description = "Generate one flexible frame and write its I/Q samples to a WAV file")]
struct Args {
    #[argh(option, short = 'o')]
    #[argh(description = "output WAV file (left channel I, right channel Q)")]
    #[argh(default = "PathBuf::from(DEFAULT_OUTPUT_FILE)")]
    output: PathBuf,

    #[argh(option, short = 'i')]
    #[argh(description = "payload file; a random payload is used when omitted")]
    input: Option<PathBuf>,

    #[argh(option, short = 'n')]
    #[argh(description = "random payload length in bytes")]
    #[argh(default = "0")]
    payload_len: usize,

    #[argh(option, short = 'm')]
    #[argh(description = "payload modulation: psk, ask, qam, bpsk or qpsk")]
    #[argh(default = "ModulationScheme::Bpsk")]
    scheme: ModulationScheme,

    #[argh(option, short = 'b')]
    #[argh(description = "payload bits per symbol")]
    #[argh(default = "1")]
    bps: u8,

    #[argh(option)]
    #[argh(description = "ramp-up length in samples")]
    #[argh(default = "16")]
    rampup: usize,

    #[argh(option)]
    #[argh(description = "phasing pattern length in samples")]
    #[argh(default = "16")]
    phasing: usize,

    #[argh(option)]
    #[argh(description = "ramp-down length in samples")]
    #[argh(default = "16")]
    rampdn: usize,

    #[argh(option)]
    #[argh(description = "user header text, truncated or zero padded to 8 bytes")]
    #[argh(default = "String::new()")]
    header: String,

    #[argh(option, short = 'r')]
    #[argh(description = "sample rate written to the WAV header")]
    #[argh(default = "DEFAULT_SAMPLE_RATE")]
    sample_rate: u32,
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let payload = match &args.input {
        Some(path) => std::fs::read(path)?,
        None => (0..args.payload_len).map(|_| rand::random::<u8>()).collect(),
    };

    let mut header = [0u8; USER_HEADER_LEN];
    args.header
        .bytes()
        .zip(header.iter_mut())
        .for_each(|(byte, slot)| *slot = byte);

    let props = FrameProperties {
        rampup_len: args.rampup,
        phasing_len: args.phasing,
        payload_len: payload.len(),
        mod_scheme: args.scheme,
        mod_bps: args.bps,
        rampdn_len: args.rampdn,
    };

    let mut generator = FrameGenerator::with_properties(props)?;
    info!("Generator ready:\n{}", generator);

    let frame = generator.generate(&header, &payload)?;

    let mut writer = IqWriter::create(&args.output, args.sample_rate)?;
    writer.write_frame(&frame)?;
    writer.finalize()?;

    info!("Wrote {} samples to {:?}", frame.len(), args.output);
    Ok(())
}

fn main() {
    let args: Args = argh::from_env();

    if let Err(error) = run(args) {
        error!("{}", error);
        std::process::exit(1);
    }
}
