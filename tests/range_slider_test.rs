use rangeslide::{HandleError, RangeSlider, SliderProps, Track, ValueChange};

struct Fixture {
    slider: RangeSlider,
    track: Track,
    values: Vec<f64>,
    changes: Vec<ValueChange>,
}

impl Fixture {
    fn from_ron(props: &str) -> Self {
        let props: SliderProps = ron::from_str(props).unwrap();
        let slider = RangeSlider::from_props(&props).unwrap();

        let track_origin = 20.0;
        let track_length = 200.0;
        let track = Track::new(track_origin, track_length).unwrap();

        Self {
            slider,
            track,
            values: props.value,
            changes: Vec::new(),
        }
    }

    fn drag(&mut self, index: usize, pointer: f64) {
        let change = self
            .slider
            .drag(&self.values, index, pointer, &self.track)
            .unwrap();

        if let Some(change) = change {
            self.values = change.values.clone();
            self.changes.push(change);
        }
    }

    fn positions(&self) -> Vec<String> {
        self.slider
            .handles(&self.values)
            .unwrap()
            .into_iter()
            .map(|handle| handle.position)
            .collect()
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::from_ron("(min: 5.0, max: 15.0, value: [5.0, 15.0])")
    }
}

#[test]
fn initial_handles_sit_at_the_ends() {
    let fixture = Fixture::default();
    assert_eq!(fixture.positions(), vec!["0%", "100%"]);
    assert_eq!(fixture.slider.padding(), "12px");
}

#[test]
fn dragging_to_the_middle_moves_to_the_midpoint() {
    let mut fixture = Fixture::default();

    fixture.drag(0, 120.0);

    assert_eq!(fixture.values, vec![10.0, 15.0]);
    assert_eq!(fixture.positions(), vec!["50%", "100%"]);
    assert_eq!(fixture.changes.len(), 1);
    assert_eq!(fixture.changes[0].previous, 5.0);
}

#[test]
fn dragging_past_the_track_clamps() {
    let mut fixture = Fixture::default();

    fixture.drag(1, -500.0);
    assert_eq!(fixture.values, vec![5.0, 5.0]);

    fixture.drag(0, 5_000.0);
    assert_eq!(fixture.values, vec![15.0, 5.0]);
}

#[test]
fn small_movements_within_a_step_emit_nothing() {
    let mut fixture = Fixture::default();

    fixture.drag(0, 120.0);
    fixture.drag(0, 121.0);
    fixture.drag(0, 119.0);

    assert_eq!(fixture.changes.len(), 1);
    assert_eq!(fixture.values, vec![10.0, 15.0]);
}

#[test]
fn half_steps_snap_pointer_input() {
    let mut fixture = Fixture::from_ron("(min: 5.0, max: 15.0, step: 0.5, value: [5.0])");

    fixture.drag(0, 20.0 + 200.0 * 0.27);

    assert_eq!(fixture.values, vec![7.5]);
    assert_eq!(fixture.positions(), vec!["25%"]);
}

#[test]
fn dragging_a_missing_handle_fails() {
    let fixture = Fixture::default();

    assert_eq!(
        fixture.slider.drag(&fixture.values, 2, 100.0, &fixture.track),
        Err(HandleError::IndexOutOfRange { index: 2, count: 2 })
    );
}

#[test]
fn invalid_props_are_rejected_up_front() {
    let props: SliderProps = ron::from_str("(min: 5.0, max: 15.0, step: -1.0)").unwrap();
    assert!(RangeSlider::from_props(&props).is_err());
}
