use super::parallax::normalized;
use super::{dom, MotionPolicy, SetupSkipped};
use web_sys::MouseEvent;

pub const TILT_SELECTOR: &str = "[data-tilt]";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltAngles {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

/// Rotation for a pointer at normalised (`nx`, `ny`); the vertical axis is inverted
/// so the edge under the pointer dips away.
pub fn tilt_angles(nx: f64, ny: f64, max_deg: f64) -> TiltAngles {
    TiltAngles {
        rotate_x: -ny * 2.0 * max_deg,
        rotate_y: nx * 2.0 * max_deg,
    }
}

pub fn tilt_transform(angles: TiltAngles, lift_px: f64) -> String {
    format!(
        "perspective(900px) translateY(-{:.1}px) rotateX({:.2}deg) rotateY({:.2}deg)",
        lift_px, angles.rotate_x, angles.rotate_y
    )
}

pub fn init(max_deg: f64, lift_px: f64, policy: MotionPolicy) -> Result<usize, SetupSkipped> {
    if !policy.tilt_enabled() {
        return Err(if policy.reduced_motion {
            SetupSkipped::ReducedMotion
        } else {
            SetupSkipped::Unsupported("hover")
        });
    }
    let cards = dom::query_all(TILT_SELECTOR)?;

    for card in &cards {
        let moving = card.clone();
        dom::listen(card, "mousemove", move |ev: MouseEvent| {
            let rect = moving.get_bounding_client_rect();
            let nx = normalized(f64::from(ev.client_x()), rect.left(), rect.width());
            let ny = normalized(f64::from(ev.client_y()), rect.top(), rect.height());
            dom::set_style(&moving, "transition", "transform 80ms ease-out");
            dom::set_style(
                &moving,
                "transform",
                &tilt_transform(tilt_angles(nx, ny, max_deg), lift_px),
            );
        });

        let leaving = card.clone();
        dom::listen(card, "mouseleave", move |_: MouseEvent| {
            dom::set_style(&leaving, "transition", "transform 400ms ease");
            dom::clear_style(&leaving, "transform");
        });
    }

    Ok(cards.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tilt_angles_follow_pointer() {
        let top_left = tilt_angles(-0.5, -0.5, 8.0);
        assert_eq!(top_left.rotate_x, 8.0);
        assert_eq!(top_left.rotate_y, -8.0);

        let centre = tilt_angles(0.0, 0.0, 8.0);
        assert_eq!(centre.rotate_x, 0.0);
        assert_eq!(centre.rotate_y, 0.0);
    }

    #[test]
    fn test_tilt_transform_combines_lift_and_rotation() {
        let css = tilt_transform(tilt_angles(0.25, 0.5, 8.0), 6.0);
        assert_eq!(
            css,
            "perspective(900px) translateY(-6.0px) rotateX(-8.00deg) rotateY(4.00deg)"
        );
    }
}
