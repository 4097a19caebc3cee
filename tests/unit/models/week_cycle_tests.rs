// Unit tests for WeekCycle and the layout table it drives

use rust_timetable::models::event::WeekCycle;
use rust_timetable::services::schedule::{resolve_variant, CycleCounts, LayoutVariant};
use test_case::test_case;

#[test_case(WeekCycle::Every, None ; "every week has no badge")]
#[test_case(WeekCycle::Odd, Some("ODD") ; "odd week badge")]
#[test_case(WeekCycle::Even, Some("EVEN") ; "even week badge")]
fn test_short_badge(cycle: WeekCycle, expected: Option<&str>) {
    assert_eq!(cycle.short_badge(), expected);
}

#[test_case("\"every\"", WeekCycle::Every)]
#[test_case("\"odd\"", WeekCycle::Odd)]
#[test_case("\"even\"", WeekCycle::Even)]
fn test_week_cycle_from_json(json: &str, expected: WeekCycle) {
    let cycle: WeekCycle = serde_json::from_str(json).unwrap();
    assert_eq!(cycle, expected);
}

#[test]
fn test_default_cycle_is_every_week() {
    assert_eq!(WeekCycle::default(), WeekCycle::Every);
}

#[test_case(0, 0, 0, LayoutVariant::Empty ; "nothing scheduled")]
#[test_case(0, 0, 1, LayoutVariant::SingleFull ; "one every-week event")]
#[test_case(0, 0, 2, LayoutVariant::Grid2x2 ; "two every-week events")]
#[test_case(0, 0, 5, LayoutVariant::Grid2x2 ; "many every-week events")]
#[test_case(1, 0, 0, LayoutVariant::DiagonalSplit ; "odd only")]
#[test_case(0, 1, 0, LayoutVariant::DiagonalSplit ; "even only")]
#[test_case(1, 1, 0, LayoutVariant::DiagonalSplit ; "odd and even")]
#[test_case(1, 0, 1, LayoutVariant::DiagonalSplit ; "odd with every-week")]
#[test_case(2, 0, 0, LayoutVariant::DiagonalSplit ; "two odd")]
#[test_case(1, 1, 1, LayoutVariant::Grid2x2 ; "three mixed")]
#[test_case(2, 2, 1, LayoutVariant::Grid2x2 ; "five mixed")]
fn test_layout_table(odd: usize, even: usize, every: usize, expected: LayoutVariant) {
    let counts = CycleCounts { odd, even, every };
    assert_eq!(resolve_variant(counts), expected);
}
