//! Equal-angle partition of the sphere into longitude/latitude cells.

use crate::constants::{LAT_TILES, LON_STEP_MAX, LON_TILES, USABLE_LAT_BAND};
use std::f32::consts::{PI, TAU};
use std::ops::Range;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid needs at least one {0} tile")]
    Empty(&'static str),
    #[error("usable latitude band {band} exceeds {lat_tiles} latitude tiles")]
    BandTooWide { band: u32, lat_tiles: u32 },
}

/// `lon_tiles × lat_tiles` cells with a centred band of usable latitude rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSpec {
    lon_tiles: u32,
    lat_tiles: u32,
    usable_lat_band: u32,
    lon_step_max: u32,
}

impl GridSpec {
    pub fn new(
        lon_tiles: u32,
        lat_tiles: u32,
        usable_lat_band: u32,
        lon_step_max: u32,
    ) -> Result<Self, GridError> {
        if lon_tiles == 0 {
            return Err(GridError::Empty("longitude"));
        }
        if lat_tiles == 0 {
            return Err(GridError::Empty("latitude"));
        }
        if usable_lat_band == 0 {
            return Err(GridError::Empty("usable latitude"));
        }
        if usable_lat_band > lat_tiles {
            return Err(GridError::BandTooWide {
                band: usable_lat_band,
                lat_tiles,
            });
        }
        Ok(Self {
            lon_tiles,
            lat_tiles,
            usable_lat_band,
            lon_step_max,
        })
    }

    pub fn lon_tiles(&self) -> u32 {
        self.lon_tiles
    }

    pub fn lat_tiles(&self) -> u32 {
        self.lat_tiles
    }

    pub fn usable_lat_band(&self) -> u32 {
        self.usable_lat_band
    }

    pub fn lon_step_max(&self) -> u32 {
        self.lon_step_max
    }

    /// First usable latitude row; the same number of rows is excluded at the bottom.
    pub fn band_start(&self) -> u32 {
        (self.lat_tiles - self.usable_lat_band) / 2
    }

    pub fn usable_rows(&self) -> Range<u32> {
        let start = self.band_start();
        start..start + self.usable_lat_band
    }

    /// Angular width of one cell in radians.
    pub fn tile_width(&self) -> f32 {
        TAU / self.lon_tiles as f32
    }

    /// Angular height of one cell in radians.
    pub fn tile_height(&self) -> f32 {
        PI / self.lat_tiles as f32
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            lon_tiles: LON_TILES,
            lat_tiles: LAT_TILES,
            usable_lat_band: USABLE_LAT_BAND,
            lon_step_max: LON_STEP_MAX,
        }
    }
}
