//! Ejemplo básico para LSM9DS1 en Linux
//!
//! Para ejecutar: cargo run --example linux_basic --features linux [-- /dev/i2c-1]

use lsm9ds1_rs::{linux, AccelRange, GyroScale, MagGain};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread;
use std::time::Duration;

fn main() {
    println!("LSM9DS1 - Ejemplo básico");

    let path = std::env::args().nth(1).unwrap_or_else(|| "/dev/i2c-1".to_string());

    // Flag para controlar la ejecución del programa
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    // Configurar el manejador para Ctrl+C
    ctrlc::set_handler(move || {
        println!("\nDeteniendo el programa...");
        r.store(false, Ordering::SeqCst);
    })
    .expect("Error al configurar el manejador de Ctrl+C");

    let mut device = match linux::open(&path) {
        Ok(device) => device,
        Err(e) => {
            eprintln!("Error al inicializar el dispositivo en {}: {}", path, e);
            return;
        }
    };
    println!("Dispositivo inicializado correctamente");

    // Configurar escalas
    if let Err(e) = device.set_accel_range(AccelRange::G4) {
        eprintln!("Error al configurar el rango del acelerómetro: {}", e);
    }
    if let Err(e) = device.set_gyro_scale(GyroScale::Dps500) {
        eprintln!("Error al configurar la escala del giroscopio: {}", e);
    }
    if let Err(e) = device.set_mag_gain(MagGain::Gauss8) {
        eprintln!("Error al configurar la ganancia del magnetómetro: {}", e);
    }

    println!("Leyendo datos. Presiona Ctrl+C para detener...");

    while running.load(Ordering::SeqCst) {
        match device.read_accelerometer() {
            Ok(a) => println!("Aceleración: x={:.2}m/s², y={:.2}m/s², z={:.2}m/s²", a.x, a.y, a.z),
            Err(e) => eprintln!("Error al leer acelerómetro: {}", e),
        }

        match device.read_gyroscope() {
            Ok(g) => println!("Giroscopio: x={:.2}°/s, y={:.2}°/s, z={:.2}°/s", g.x, g.y, g.z),
            Err(e) => eprintln!("Error al leer giroscopio: {}", e),
        }

        match device.read_magnetometer() {
            Ok(m) => println!("Magnetómetro: x={:.2}G, y={:.2}G, z={:.2}G", m.x, m.y, m.z),
            Err(e) => eprintln!("Error al leer magnetómetro: {}", e),
        }

        match device.read_temperature() {
            Ok(temp) => println!("Temperatura: {:.2}°C", temp),
            Err(e) => eprintln!("Error al leer temperatura: {}", e),
        }
        println!("-------------------");
        thread::sleep(Duration::from_millis(200));
    }

    println!("Ejemplo finalizado");
}
