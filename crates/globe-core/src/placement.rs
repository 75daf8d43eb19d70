use crate::geometry::TilePatch;
use crate::grid::GridSpec;
use rand::Rng;

/// One portfolio project as listed in the static manifest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectEntry {
    pub id: String,
    pub texture_url: String,
    pub is_transparent: bool,
}

impl ProjectEntry {
    pub fn new(id: impl Into<String>, texture_url: impl Into<String>, is_transparent: bool) -> Self {
        Self {
            id: id.into(),
            texture_url: texture_url.into(),
            is_transparent,
        }
    }
}

/// Stable index of a placed tile; used as the key for hit tests, hover and scale state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub usize);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TilePlacement {
    pub project: ProjectEntry,
    /// Accumulates across the walk; may exceed `lon_tiles` (wraps visually).
    pub lon_index: u32,
    pub lat_index: u32,
}

impl TilePlacement {
    pub fn patch(&self, grid: &GridSpec) -> TilePatch {
        TilePatch::for_cell(grid, self.lon_index, self.lat_index)
    }

    /// Cell coordinates with the longitude folded onto one revolution.
    pub fn cell(&self, grid: &GridSpec) -> (u32, u32) {
        (self.lon_index % grid.lon_tiles(), self.lat_index)
    }
}

/// Walk the grid with random forward steps, assigning one cell per entry.
///
/// The first entry sits at longitude 0 on row `lat_tiles / 2`, or in the
/// middle of the usable band when that row lies outside it.
///
/// Longitude always advances by 1..=`lon_step_max + 1` columns; the row is the
/// previous row shifted by a random offset and folded into the band. Nothing
/// stops two entries landing on the same cell once the walk wraps around.
pub fn place_tiles<R: Rng + ?Sized>(
    grid: &GridSpec,
    entries: &[ProjectEntry],
    rng: &mut R,
) -> Vec<TilePlacement> {
    let band_start = grid.band_start();
    let band = grid.usable_lat_band();
    let mut out: Vec<TilePlacement> = Vec::with_capacity(entries.len());
    for entry in entries {
        let (lon_index, lat_index) = match out.last() {
            None => (0, first_row(grid)),
            Some(prev) => {
                let lon = prev.lon_index + 1 + rng.gen_range(0..=grid.lon_step_max());
                let shift = rng.gen_range(0..band.saturating_sub(1).max(1));
                let lat = band_start + (prev.lat_index + 1 + shift) % band;
                (lon, lat)
            }
        };
        log::debug!(
            "[placement] {} -> lon={} lat={}",
            entry.id,
            lon_index,
            lat_index
        );
        out.push(TilePlacement {
            project: entry.clone(),
            lon_index,
            lat_index,
        });
    }
    out
}

/// The equator row, or the band middle when the equator row is unusable.
fn first_row(grid: &GridSpec) -> u32 {
    let equator = grid.lat_tiles() / 2;
    if grid.usable_rows().contains(&equator) {
        equator
    } else {
        grid.band_start() + grid.usable_lat_band() / 2
    }
}

/// Count of placements that share a folded cell with an earlier placement.
pub fn overlap_count(grid: &GridSpec, placements: &[TilePlacement]) -> usize {
    let mut seen = fnv::FnvHashSet::default();
    placements
        .iter()
        .filter(|p| !seen.insert(p.cell(grid)))
        .count()
}
