use hound::{SampleFormat, WavSpec, WavWriter};
use num_complex::Complex32;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Two-channel 32-bit float WAV: left is I, right is Q.
pub struct IqWriter {
    inner: WavWriter<BufWriter<File>>,
}

impl IqWriter {
    pub fn create<P: AsRef<Path>>(path: P, sample_rate: u32) -> Result<Self, hound::Error> {
        let wav_spec = WavSpec {
            channels: 2,
            bits_per_sample: 32,
            sample_rate,
            sample_format: SampleFormat::Float,
        };
        let writer = WavWriter::create(path, wav_spec)?;
        Ok(Self { inner: writer })
    }

    pub fn write_frame(&mut self, frame: &[Complex32]) -> Result<(), hound::Error> {
        for sample in frame {
            self.inner.write_sample(sample.re)?;
            self.inner.write_sample(sample.im)?;
        }
        Ok(())
    }

    pub fn finalize(self) -> Result<(), hound::Error> {
        self.inner.finalize()
    }
}
