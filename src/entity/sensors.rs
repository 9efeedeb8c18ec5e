use super::*;

/// How long active sensors can emit before they are forced off
pub const ACTIVE_SENSOR_WINDOW: Ticks = Ticks(5 * Ticks::FREQUENCY_HZ);
/// How long active sensors must stay off before they can be turned on again
pub const ACTIVE_SENSOR_COOLDOWN: Ticks = Ticks(2 * Ticks::FREQUENCY_HZ);

/// Handles a request to turn active sensors on or off. active_ticks is the remaining emitting
/// window while on, and the remaining cooldown while off. Requests to turn on during the
/// cooldown are ignored.
pub fn request_active_sensors(ext: &mut dyn Extension, active: bool) {
    if active == ext.active() {
        return;
    }
    if active {
        if ext.active_ticks().is_zero() {
            ext.set_active(true);
            ext.set_active_ticks(ACTIVE_SENSOR_WINDOW);
        }
    } else {
        ext.set_active(false);
        ext.set_active_ticks(ACTIVE_SENSOR_COOLDOWN);
    }
}

/// Advances the sensor timers by one tick. Sensors that are on with no window left (including
/// after a type change, which clears active_ticks) are turned off.
pub fn update_active_sensors(ext: &mut dyn Extension) {
    let ticks = ext.active_ticks();
    if ext.active() {
        if ticks.is_zero() {
            ext.set_active(false);
            ext.set_active_ticks(ACTIVE_SENSOR_COOLDOWN);
        } else {
            ext.set_active_ticks(ticks - Ticks::ONE);
        }
    } else if !ticks.is_zero() {
        ext.set_active_ticks(ticks - Ticks::ONE);
    }
}
