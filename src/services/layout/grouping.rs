use crate::models::event::ScheduleEvent;
use crate::models::header::DayHeader;

/// Events per configured day, in header order.
///
/// Holds references into the caller's event list; an event shown on several
/// days is the same value in every column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayGroups<'a> {
    days: Vec<(i32, Vec<&'a ScheduleEvent>)>,
}

impl<'a> DayGroups<'a> {
    /// Events for a day index, `None` when no header uses that index
    pub fn get(&self, day_index: i32) -> Option<&[&'a ScheduleEvent]> {
        self.days
            .iter()
            .find(|(day, _)| *day == day_index)
            .map(|(_, events)| events.as_slice())
    }

    pub fn contains_day(&self, day_index: i32) -> bool {
        self.days.iter().any(|(day, _)| *day == day_index)
    }

    /// Day indices in first-seen header order
    pub fn day_indices(&self) -> impl Iterator<Item = i32> + '_ {
        self.days.iter().map(|(day, _)| *day)
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, &[&'a ScheduleEvent])> + '_ {
        self.days
            .iter()
            .map(|(day, events)| (*day, events.as_slice()))
    }

    /// Number of distinct day columns
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    fn slot_mut(&mut self, day_index: i32) -> Option<&mut Vec<&'a ScheduleEvent>> {
        self.days
            .iter_mut()
            .find(|(day, _)| *day == day_index)
            .map(|(_, events)| events)
    }
}

/// Place events into their day columns.
///
/// Every header gets a list, even if nothing falls on it. An event lands in a
/// column once for each time that column's index appears in its `days`;
/// indices with no matching header are dropped. Input order is kept within
/// each day, so sort first for paint order.
pub fn group_by_day<'a, I>(events: I, headers: &[DayHeader]) -> DayGroups<'a>
where
    I: IntoIterator<Item = &'a ScheduleEvent>,
{
    let mut groups = DayGroups::default();
    for header in headers {
        if !groups.contains_day(header.day_index) {
            groups.days.push((header.day_index, Vec::new()));
        }
    }

    for event in events {
        for &day_index in &event.days {
            match groups.slot_mut(day_index) {
                Some(slot) => slot.push(event),
                None => log::trace!(
                    "Dropping day {} of event '{}': no matching header",
                    day_index,
                    event.id
                ),
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::header::default_headers;
    use crate::utils::time::ClockTime;
    use pretty_assertions::assert_eq;

    fn event(id: &str, days: Vec<i32>, start: &str) -> ScheduleEvent {
        ScheduleEvent::new(
            id,
            days,
            ClockTime::parse(start).unwrap(),
            ClockTime::parse("23:00").unwrap(),
        )
        .unwrap()
    }

    fn ids(events: &[&ScheduleEvent]) -> Vec<String> {
        events.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn test_every_header_gets_a_list() {
        let events: Vec<ScheduleEvent> = Vec::new();
        let groups = group_by_day(&events, &default_headers());

        assert_eq!(groups.len(), 5);
        for day in 0..5 {
            assert_eq!(groups.get(day).map(<[_]>::len), Some(0));
        }
    }

    #[test]
    fn test_multi_day_event_lands_in_each_column() {
        let events = vec![event("1", vec![0, 2, 4], "10:00")];
        let groups = group_by_day(&events, &default_headers());

        assert_eq!(ids(groups.get(0).unwrap()), vec!["1"]);
        assert!(groups.get(1).unwrap().is_empty());
        assert_eq!(ids(groups.get(2).unwrap()), vec!["1"]);
        assert!(groups.get(3).unwrap().is_empty());
        assert_eq!(ids(groups.get(4).unwrap()), vec!["1"]);

        // Same value, not a copy
        assert!(std::ptr::eq(groups.get(0).unwrap()[0], &events[0]));
        assert!(std::ptr::eq(groups.get(4).unwrap()[0], &events[0]));
    }

    #[test]
    fn test_unknown_days_are_dropped() {
        let events = vec![event("weekend", vec![5, 6], "10:00"), event("mixed", vec![1, 9], "11:00")];
        let groups = group_by_day(&events, &default_headers());

        let total: usize = groups.iter().map(|(_, events)| events.len()).sum();
        assert_eq!(total, 1);
        assert_eq!(ids(groups.get(1).unwrap()), vec!["mixed"]);
        assert!(groups.get(5).is_none());
    }

    #[test]
    fn test_repeated_day_index_counts_each_occurrence() {
        let events = vec![event("1", vec![2, 2], "10:00")];
        let groups = group_by_day(&events, &default_headers());
        assert_eq!(groups.get(2).unwrap().len(), 2);
    }

    #[test]
    fn test_keeps_input_order_within_day() {
        let events = vec![
            event("late", vec![0], "15:00"),
            event("early", vec![0], "08:00"),
        ];
        let groups = group_by_day(&events, &default_headers());
        assert_eq!(ids(groups.get(0).unwrap()), vec!["late", "early"]);
    }

    #[test]
    fn test_non_contiguous_headers() {
        let headers = vec![DayHeader::new("Odd", 7), DayHeader::new("Even", -2)];
        let events = vec![event("a", vec![-2, 7, 0], "09:00")];
        let groups = group_by_day(&events, &headers);

        assert_eq!(groups.day_indices().collect::<Vec<_>>(), vec![7, -2]);
        assert_eq!(groups.get(7).unwrap().len(), 1);
        assert_eq!(groups.get(-2).unwrap().len(), 1);
        assert!(groups.get(0).is_none());
    }

    #[test]
    fn test_duplicate_header_indices_share_one_list() {
        let headers = vec![DayHeader::new("Mon", 0), DayHeader::new("Mon again", 0)];
        let events = vec![event("a", vec![0], "09:00")];
        let groups = group_by_day(&events, &headers);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups.get(0).unwrap().len(), 1);
    }
}
