//! Ordering and grouping of derived timers for display

pub mod sorting;
pub mod grouping;
pub mod crop_groups;

pub use crop_groups::{crop_panels, group_crops_by_type, CropGroup, CropItem, CropPanel};
pub use grouping::group_ready_crops;
pub use sorting::sort_timers;

use crate::models::{DerivedTimer, TimerCategory};

/// Ready crops (merged by name) first, then everything else in display order
pub fn aggregate_timers(timers: Vec<DerivedTimer>) -> Vec<DerivedTimer> {
    let (ready_crops, mut others): (Vec<_>, Vec<_>) = timers
        .into_iter()
        .partition(|t| t.category == TimerCategory::Crop && t.is_ready);

    sort_timers(&mut others);

    let mut aggregated = group_ready_crops(ready_crops);
    aggregated.extend(others);
    aggregated
}
