use super::*;

#[test]
fn ui_state_default_tab_is_car() {
    let state = UiState::default();
    assert_eq!(state.active_tab, VehicleTab::Car);
}

#[test]
fn car_tab_is_labeled_cars() {
    assert_eq!(VehicleTab::Car.label(), "Cars");
}

#[test]
fn only_the_car_tab_exists() {
    assert_eq!(VehicleTab::ALL, [VehicleTab::Car]);
}
