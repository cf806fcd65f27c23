//! Read-side views over the case list.
//!
//! Everything here is a pure function of its inputs and is recomputed on every
//! call; nothing is cached between reads.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::department::Department;
use crate::models::drape::{DrapeSelection, DrapeType};
use crate::models::room::{OperatingRoom, RoomCatalog};
use crate::models::surgery::Surgery;
use crate::services::placement::BoardGeometry;

/// One room row of the board
#[derive(Debug, Clone, PartialEq)]
pub struct RoomGroup<'a> {
    pub room: &'a OperatingRoom,
    pub surgeries: Vec<&'a Surgery>,
}

impl RoomGroup<'_> {
    pub fn has_conflicts(&self) -> bool {
        self.surgeries.iter().any(|surgery| surgery.is_conflicting)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentGroup<'a> {
    pub department: Department,
    pub surgeries: Vec<&'a Surgery>,
}

/// Cases on a given date, in input order.
pub fn for_day<'a>(
    items: impl IntoIterator<Item = &'a Surgery>,
    date: NaiveDate,
) -> Vec<&'a Surgery> {
    items.into_iter().filter(|surgery| surgery.date == date).collect()
}

/// Every catalog room in catalog order with its cases sorted by start.
pub fn group_by_room<'a>(
    items: impl IntoIterator<Item = &'a Surgery>,
    rooms: &'a RoomCatalog,
) -> Vec<RoomGroup<'a>> {
    let items: Vec<&Surgery> = items.into_iter().collect();
    rooms
        .iter()
        .map(|room| RoomGroup {
            room,
            surgeries: sorted_by_start(
                items
                    .iter()
                    .copied()
                    .filter(|surgery| surgery.room_id == Some(room.id)),
            ),
        })
        .collect()
}

/// Every department in `Department::ALL` order with its cases sorted by start.
pub fn group_by_department<'a>(
    items: impl IntoIterator<Item = &'a Surgery>,
) -> Vec<DepartmentGroup<'a>> {
    let items: Vec<&Surgery> = items.into_iter().collect();
    Department::ALL
        .iter()
        .map(|&department| DepartmentGroup {
            department,
            surgeries: sorted_by_start(
                items
                    .iter()
                    .copied()
                    .filter(|surgery| surgery.department == department),
            ),
        })
        .collect()
}

/// Cases on `date` waiting for a room.
pub fn unassigned<'a>(
    items: impl IntoIterator<Item = &'a Surgery>,
    date: NaiveDate,
) -> Vec<&'a Surgery> {
    items
        .into_iter()
        .filter(|surgery| surgery.date == date && !surgery.is_assigned())
        .collect()
}

/// Assigned cases that intersect the board's visible hours.
pub fn visible_in_window<'a>(
    items: impl IntoIterator<Item = &'a Surgery>,
    geometry: &BoardGeometry,
) -> Vec<&'a Surgery> {
    let (window_start, window_end) = (geometry.window_start(), geometry.window_end());
    items
        .into_iter()
        .filter(|surgery| {
            surgery.is_assigned()
                && surgery
                    .interval()
                    .intersects_window(window_start, window_end)
        })
        .collect()
}

fn sorted_by_start<'a>(items: impl Iterator<Item = &'a Surgery>) -> Vec<&'a Surgery> {
    let mut sorted: Vec<&Surgery> = items.collect();
    sorted.sort_by_key(|surgery| surgery.start_time);
    sorted
}

/// Drape counts for one room or the whole board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrapeCounts {
    pub standard: BTreeMap<DrapeType, usize>,
    /// Free-text qualifiers of "other" drapes, in input order
    pub others: Vec<String>,
}

impl DrapeCounts {
    pub fn count(&self, drape: DrapeType) -> usize {
        self.standard.get(&drape).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.standard.values().sum::<usize>() + self.others.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Record a selection. Returns false when nothing was counted.
    fn record(&mut self, selection: &DrapeSelection) -> bool {
        match selection {
            DrapeSelection::Standard(drape) => {
                *self.standard.entry(*drape).or_default() += 1;
                true
            }
            DrapeSelection::Other(_) => match selection.other_qualifier() {
                Some(qualifier) => {
                    self.others.push(qualifier.to_string());
                    true
                }
                None => false,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomDrapeUsage<'a> {
    pub room: &'a OperatingRoom,
    pub usage: DrapeCounts,
}

/// Drape supply tally: one entry per catalog room plus overall totals.
#[derive(Debug, Clone, PartialEq)]
pub struct DrapeUsage<'a> {
    pub rooms: Vec<RoomDrapeUsage<'a>>,
    pub totals: DrapeCounts,
}

/// Tally drapes of assigned cases per room.
///
/// Unassigned cases and "other" drapes without a qualifier are not counted.
pub fn drape_usage<'a>(
    items: impl IntoIterator<Item = &'a Surgery>,
    rooms: &'a RoomCatalog,
) -> DrapeUsage<'a> {
    let mut per_room: Vec<DrapeCounts> = vec![DrapeCounts::default(); rooms.len()];
    let mut totals = DrapeCounts::default();

    for surgery in items {
        let (Some(room_id), Some(selection)) = (surgery.room_id, surgery.drape.as_ref()) else {
            continue;
        };
        let Some(index) = rooms.index_of(room_id) else {
            log::warn!(
                "Skipping drape for case {:?}: room {} is not in the catalog",
                surgery.id,
                room_id
            );
            continue;
        };
        if per_room[index].record(selection) {
            totals.record(selection);
        }
    }

    DrapeUsage {
        rooms: rooms
            .iter()
            .zip(per_room)
            .map(|(room, usage)| RoomDrapeUsage { room, usage })
            .collect(),
        totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::room::RoomId;
    use crate::models::settings::TimeScale;
    use pretty_assertions::assert_eq;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn case(id: u64, room: Option<RoomId>, start: &str, end: &str) -> Surgery {
        let mut builder = Surgery::builder()
            .patient_name("Bùi Thị I")
            .procedure("Cắt tuyến giáp")
            .date(day(10))
            .times(start.parse().unwrap(), end.parse().unwrap());
        if let Some(room) = room {
            builder = builder.room(room);
        }
        let mut surgery = builder.build().unwrap();
        surgery.id = Some(id);
        surgery
    }

    fn ids(items: &[&Surgery]) -> Vec<u64> {
        items.iter().filter_map(|s| s.id).collect()
    }

    #[test]
    fn test_for_day_and_unassigned() {
        let mut other_day = case(3, None, "00:00", "00:00");
        other_day.date = day(11);
        let items = vec![
            case(1, Some(1), "08:00", "09:00"),
            case(2, None, "00:00", "00:00"),
            other_day,
        ];
        assert_eq!(ids(&for_day(&items, day(10))), vec![1, 2]);
        assert_eq!(ids(&unassigned(&items, day(10))), vec![2]);
        assert_eq!(ids(&unassigned(&items, day(11))), vec![3]);
    }

    #[test]
    fn test_group_by_room_keeps_catalog_order() {
        let rooms = RoomCatalog::default();
        let items = vec![
            case(1, Some(2), "10:00", "11:00"),
            case(2, Some(2), "08:00", "09:00"),
            case(3, Some(1), "09:00", "10:00"),
            case(4, None, "00:00", "00:00"),
        ];
        let groups = group_by_room(&items, &rooms);
        assert_eq!(groups.len(), 10);
        assert_eq!(groups[0].room.id, 1);
        assert_eq!(ids(&groups[0].surgeries), vec![3]);
        assert_eq!(ids(&groups[1].surgeries), vec![2, 1]);
        assert!(groups[9].surgeries.is_empty());
        assert!(!groups[1].has_conflicts());
    }

    #[test]
    fn test_group_by_department_covers_every_department() {
        let mut neuro = case(2, Some(3), "08:30", "13:00");
        neuro.department = Department::Neuro;
        let items = vec![case(1, Some(1), "08:00", "09:00"), neuro];

        let groups = group_by_department(&items);
        assert_eq!(groups.len(), Department::ALL.len());
        let neuro_group = groups
            .iter()
            .find(|g| g.department == Department::Neuro)
            .unwrap();
        assert_eq!(ids(&neuro_group.surgeries), vec![2]);
        let general = groups
            .iter()
            .find(|g| g.department == Department::General)
            .unwrap();
        assert_eq!(ids(&general.surgeries), vec![1]);
    }

    #[test]
    fn test_visible_in_window() {
        let items = vec![
            case(1, Some(1), "06:00", "07:30"),
            case(2, Some(1), "05:00", "07:00"),
            case(3, None, "08:00", "09:00"),
            case(4, Some(2), "12:30", "13:15"),
        ];
        let all = BoardGeometry::default();
        assert_eq!(ids(&visible_in_window(&items, &all)), vec![1, 4]);

        let afternoon = BoardGeometry::for_scale(TimeScale::Afternoon);
        assert_eq!(ids(&visible_in_window(&items, &afternoon)), vec![4]);
    }

    #[test]
    fn test_drape_usage_tally() {
        let rooms = RoomCatalog::default();
        let mut a = case(1, Some(1), "08:00", "09:00");
        a.drape = Some(DrapeType::Major.into());
        let mut b = case(2, Some(1), "09:00", "10:00");
        b.drape = Some(DrapeType::Major.into());
        let mut c = case(3, Some(2), "08:00", "09:00");
        c.drape = Some(DrapeSelection::other("Săng tim"));
        let mut d = case(4, Some(2), "09:00", "10:00");
        d.drape = Some(DrapeSelection::other("   "));
        let mut e = case(5, None, "00:00", "00:00");
        e.drape = Some(DrapeType::Medium.into());
        let mut f = case(6, Some(3), "08:00", "09:00");
        f.drape = None;

        let items = vec![a, b, c, d, e, f];
        let usage = drape_usage(&items, &rooms);

        assert_eq!(usage.rooms.len(), 10);
        assert_eq!(usage.rooms[0].usage.count(DrapeType::Major), 2);
        assert_eq!(usage.rooms[1].usage.others, vec!["Săng tim".to_string()]);
        assert_eq!(usage.rooms[1].usage.total(), 1);
        assert!(usage.rooms[2].usage.is_empty());
        assert_eq!(usage.totals.count(DrapeType::Medium), 0);
        assert_eq!(usage.totals.total(), 3);
    }

    #[test]
    fn test_drape_usage_skips_unknown_room() {
        let rooms = RoomCatalog::default();
        let mut stray = case(1, Some(42), "08:00", "09:00");
        stray.drape = Some(DrapeType::Fenestrated.into());
        let items = vec![stray];

        let usage = drape_usage(&items, &rooms);
        assert!(usage.totals.is_empty());
    }
}
