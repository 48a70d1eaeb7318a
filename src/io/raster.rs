//! In-place raster edits done through GDAL rather than a command-line tool.
use std::path::Path;

use chrono::NaiveDate;
use gdal::{Dataset, DatasetOptions, GdalOpenFlags};
use tracing::info;

use crate::error::{Error, Result};
use crate::types::Era;

/// Value added to "days after launch" to obtain day-of-year in `year`.
pub fn day_of_year_offset(year: i32) -> Result<i32> {
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(Error::InvalidArgument {
        arg: "year",
        value: year.to_string(),
    })?;
    let days = (Era::for_year(year).launch_date() - jan1).num_days();
    Ok(days as i32 + 1)
}

/// Shift every valid pixel by `offset`; pixels equal to `nodata` are left as is.
pub fn shift_day_values(values: &mut [i16], nodata: Option<i16>, offset: i32) {
    for v in values.iter_mut() {
        if Some(*v) == nodata {
            continue;
        }
        *v = (*v as i32 + offset).clamp(i16::MIN as i32, i16::MAX as i32) as i16;
    }
}

/// Convert the first band of an Int16 "days after launch" raster to day-of-year.
pub fn correct_day_of_year(path: &Path, year: i32) -> Result<()> {
    let offset = day_of_year_offset(year)?;
    let dataset = Dataset::open_ex(
        path,
        DatasetOptions {
            open_flags: GdalOpenFlags::GDAL_OF_UPDATE | GdalOpenFlags::GDAL_OF_RASTER,
            ..Default::default()
        },
    )?;
    let mut band = dataset.rasterband(1)?;
    let (cols, rows) = band.size();
    let nodata = band.no_data_value().map(|v| v as i16);
    let mut buf = band.read_as::<i16>((0, 0), (cols, rows), (cols, rows), None)?;
    shift_day_values(buf.data_mut(), nodata, offset);
    band.write((0, 0), (cols, rows), &mut buf)?;
    info!("Converted {:?} to day-of-year (offset {})", path, offset);
    Ok(())
}
