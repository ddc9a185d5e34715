use aeroforce::{Part, TabulatedBody, Vessel};

/// A small winged vehicle with one part the physics ignores
pub fn create_test_vessel() -> Vessel {
    Vessel::new("test_vessel", 17)
        .with_part(Part::new("pod", 840.0).with_resources(60.0).with_drag_area(0.4))
        .with_part(
            Part::new("tank", 250.0)
                .with_resources(2000.0)
                .with_drag_area(0.3),
        )
        .with_part(Part::new("wing", 120.0).with_drag_area(0.05).with_lift_area(6.0))
        .with_part(Part::insignificant("antenna", 4.0).with_drag_area(3.0))
}

/// Mass of the significant parts of [`create_test_vessel`]
pub const TEST_VESSEL_MASS: f64 = 840.0 + 60.0 + 250.0 + 2000.0 + 120.0;

/// A body with a 70 km atmosphere
pub fn create_test_body() -> TabulatedBody {
    TabulatedBody::new("Kerbin", 1, 70_000.0)
        .with_sample(0.0, 1.225)
        .with_sample(5_000.0, 0.74)
        .with_sample(20_000.0, 0.09)
        .with_sample(70_000.0, 0.0)
}

pub fn create_airless_body() -> TabulatedBody {
    TabulatedBody::airless("Mun", 2)
}
