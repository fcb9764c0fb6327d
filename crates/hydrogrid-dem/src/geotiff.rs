//! GeoTIFF loading for elevation coverages.
//!
//! Reads exactly the shape of raster the flood engine consumes: a single
//! band of elevation samples with ModelTiepoint/ModelPixelScale
//! georeferencing and an optional GDAL no-data tag. This is not a general
//! raster codec.

use crate::{DemError, ElevationField, GeoTransform, Result};
use std::path::Path;
use tiff::decoder::{Decoder, DecodingResult, Limits};
use tiff::tags::Tag;

/// GeoTIFF ModelTiepoint tag: `[i, j, k, x, y, z]` anchoring pixel `(i, j)`
/// at world `(x, y)`.
const TAG_MODEL_TIEPOINT: u16 = 33922;
/// GeoTIFF ModelPixelScale tag: `[sx, sy, sz]` world units per pixel.
const TAG_MODEL_PIXEL_SCALE: u16 = 33550;
/// GDAL_NODATA tag, an ASCII-encoded sentinel value.
const TAG_GDAL_NODATA: u16 = 42113;

/// Load an elevation coverage from a north-up GeoTIFF file.
///
/// Fails with [`DemError::MissingGeoTag`] when the file carries no
/// ModelTiepoint/ModelPixelScale pair, since an elevation coverage without
/// georeferencing cannot be used for propagation.
pub fn load_geotiff<P: AsRef<Path>>(path: P) -> Result<ElevationField> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let mut decoder = Decoder::new(file)?;

    // National DEM coverages are large; raise the decoder limits so a whole
    // coverage can be read before AOI cropping.
    let mut limits = Limits::default();
    limits.decoding_buffer_size = 1024 * 1024 * 1024;
    limits.intermediate_buffer_size = 1024 * 1024 * 1024;
    limits.ifd_value_size = 1024 * 1024 * 1024;
    decoder = decoder.with_limits(limits);

    let (width, height) = decoder.dimensions()?;
    let geo = read_geotransform(&mut decoder, path)?;
    let no_data = read_nodata(&mut decoder);
    let data = decode_samples(&mut decoder)?;

    ElevationField::new(width as usize, height as usize, data, no_data, geo)
}

/// Build the affine geotransform from the GeoTIFF georeferencing tags.
fn read_geotransform<R: std::io::Read + std::io::Seek>(
    decoder: &mut Decoder<R>,
    path: &Path,
) -> Result<GeoTransform> {
    let tiepoint = decoder.get_tag_f64_vec(Tag::Unknown(TAG_MODEL_TIEPOINT));
    let scale = decoder.get_tag_f64_vec(Tag::Unknown(TAG_MODEL_PIXEL_SCALE));

    if let (Ok(tiepoint), Ok(scale)) = (tiepoint, scale) {
        if tiepoint.len() >= 6 && scale.len() >= 2 {
            // The tiepoint is conventionally pixel (0, 0); shift the world
            // anchor if it is not.
            let west = tiepoint[3] - tiepoint[0] * scale[0];
            let north = tiepoint[4] + tiepoint[1] * scale[1];
            return GeoTransform::new(west, north, scale[0], -scale[1]);
        }
    }

    Err(DemError::MissingGeoTag(path.display().to_string()))
}

/// Read the GDAL no-data sentinel, if declared.
fn read_nodata<R: std::io::Read + std::io::Seek>(decoder: &mut Decoder<R>) -> Option<f32> {
    decoder
        .get_tag_ascii_string(Tag::Unknown(TAG_GDAL_NODATA))
        .ok()
        .and_then(|s| s.trim().parse().ok())
}

/// Decode the sample band to f32 regardless of on-disk sample format.
fn decode_samples<R: std::io::Read + std::io::Seek>(decoder: &mut Decoder<R>) -> Result<Vec<f32>> {
    let result = decoder.read_image()?;

    match result {
        DecodingResult::F32(data) => Ok(data),
        DecodingResult::F64(data) => Ok(data.into_iter().map(|v| v as f32).collect()),
        DecodingResult::I16(data) => Ok(data.into_iter().map(|v| v as f32).collect()),
        DecodingResult::I32(data) => Ok(data.into_iter().map(|v| v as f32).collect()),
        DecodingResult::U16(data) => Ok(data.into_iter().map(|v| v as f32).collect()),
        DecodingResult::U32(data) => Ok(data.into_iter().map(|v| v as f32).collect()),
        DecodingResult::U8(data) => Ok(data.into_iter().map(|v| v as f32).collect()),
        DecodingResult::I8(data) => Ok(data.into_iter().map(|v| v as f32).collect()),
        DecodingResult::U64(data) => Ok(data.into_iter().map(|v| v as f32).collect()),
        DecodingResult::I64(data) => Ok(data.into_iter().map(|v| v as f32).collect()),
    }
}
