use std::sync::Mutex;

use pyo3::prelude::*;

use crate::{
    Direction, Motor, RoverShield, RppalTransport, Servo, ShieldError,
    registers::PCA9685_ADDRESS,
};

fn to_py_err(e: ShieldError) -> PyErr {
    pyo3::exceptions::PyRuntimeError::new_err(e.to_string())
}

#[pyclass]
pub struct RoverShieldPy {
    shield: Mutex<Option<RoverShield<RppalTransport>>>,
}

impl RoverShieldPy {
    fn with_shield<R>(
        &self,
        f: impl FnOnce(&mut RoverShield<RppalTransport>) -> PyResult<R>,
    ) -> PyResult<R> {
        let mut guard = self
            .shield
            .lock()
            .map_err(|_| pyo3::exceptions::PyRuntimeError::new_err("shield lock poisoned"))?;
        let shield = guard
            .as_mut()
            .ok_or_else(|| pyo3::exceptions::PyRuntimeError::new_err("shield is closed"))?;
        f(shield)
    }
}

#[pymethods]
impl RoverShieldPy {
    #[staticmethod]
    #[pyo3(signature = (bus=None, address=None))]
    pub fn open(bus: Option<u8>, address: Option<u8>) -> PyResult<Self> {
        let transport = match bus {
            Some(bus) => RppalTransport::with_bus(bus).map_err(to_py_err)?,
            None => RppalTransport::new().map_err(to_py_err)?,
        };
        let shield = RoverShield::with_address(transport, address.unwrap_or(PCA9685_ADDRESS));

        Ok(Self {
            shield: Mutex::new(Some(shield)),
        })
    }

    pub fn set_servo_angle(&self, servo: u8, degrees: u16) -> PyResult<()> {
        let servo = Servo::from_index(servo).ok_or_else(|| {
            pyo3::exceptions::PyValueError::new_err("servo number must be 1..=4")
        })?;
        self.with_shield(|shield| shield.set_servo_angle(servo, degrees).map_err(to_py_err))
    }

    /// Returns False when the motor number is outside 1..=6 and the
    /// command was skipped.
    pub fn set_motor_speed(&self, motor: u8, direction: i32, speed: u16) -> PyResult<bool> {
        let direction = if direction < 0 {
            Direction::Ccw
        } else {
            Direction::Cw
        };
        self.with_shield(|shield| {
            shield
                .set_motor_speed_by_index(motor, direction, speed)
                .map(|outcome| outcome.applied())
                .map_err(to_py_err)
        })
    }

    pub fn stop_motor(&self, motor: u8) -> PyResult<bool> {
        match Motor::from_index(motor) {
            Some(motor) => self.with_shield(|shield| {
                shield.stop_motor(motor).map(|_| true).map_err(to_py_err)
            }),
            None => Ok(false),
        }
    }

    pub fn stop_all_motors(&self) -> PyResult<()> {
        self.with_shield(|shield| shield.stop_all_motors().map_err(to_py_err))
    }

    pub fn close(&self) {
        if let Ok(mut guard) = self.shield.lock() {
            *guard = None;
        }
    }
}

#[pymodule]
fn rovershield_controller_py(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<RoverShieldPy>()?;
    Ok(())
}
