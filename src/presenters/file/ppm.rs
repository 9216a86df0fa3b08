use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::frame_buffer::FrameBuffer;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, frame: &FrameBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();
        let mut file = BufWriter::new(std::fs::File::create(filepath)?);

        write_ppm(&mut file, frame)?;
        file.flush()?;

        debug!(path = %filepath.display(), "wrote ppm");
        Ok(())
    }
}

/// Writes a binary (P6) PPM image.
pub fn write_ppm(writer: &mut impl Write, frame: &FrameBuffer) -> std::io::Result<()> {
    let pixel_size = frame.pixel_size();

    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", pixel_size.width(), pixel_size.height())?;
    writeln!(writer, "255")?;
    writer.write_all(&frame.to_rgb_bytes())?;

    Ok(())
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
