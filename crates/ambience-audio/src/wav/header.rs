//! The fixed RIFF/WAVE header.

/// Size of the header in bytes.
pub const WAV_HEADER_LEN: usize = 44;
/// Channel count of every file.
pub const CHANNELS: u16 = 1;
/// Bit depth of every file.
pub const BITS_PER_SAMPLE: u16 = 16;

const BLOCK_ALIGN: u16 = CHANNELS * BITS_PER_SAMPLE / 8;

/// Builds the header for `data_size` bytes of PCM at `sample_rate`.
///
/// Layout: `RIFF`, file size minus 8, `WAVE`, a 16-byte `fmt ` chunk
/// (format 1, channels, rate, byte rate, block align, bit depth), then
/// the `data` tag and payload size. All integers are little-endian.
pub fn wav_header(sample_rate: u32, data_size: u32) -> [u8; WAV_HEADER_LEN] {
    let riff_size = 36 + data_size;
    let byte_rate = sample_rate * BLOCK_ALIGN as u32;

    let mut header = [0u8; WAV_HEADER_LEN];

    header[0..4].copy_from_slice(b"RIFF");
    header[4..8].copy_from_slice(&riff_size.to_le_bytes());
    header[8..12].copy_from_slice(b"WAVE");

    header[12..16].copy_from_slice(b"fmt ");
    header[16..20].copy_from_slice(&16u32.to_le_bytes());
    header[20..22].copy_from_slice(&1u16.to_le_bytes()); // PCM
    header[22..24].copy_from_slice(&CHANNELS.to_le_bytes());
    header[24..28].copy_from_slice(&sample_rate.to_le_bytes());
    header[28..32].copy_from_slice(&byte_rate.to_le_bytes());
    header[32..34].copy_from_slice(&BLOCK_ALIGN.to_le_bytes());
    header[34..36].copy_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    header[36..40].copy_from_slice(b"data");
    header[40..44].copy_from_slice(&data_size.to_le_bytes());

    header
}
