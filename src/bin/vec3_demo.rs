// src/bin/vec3_demo.rs
//
// Normalisation and cross product on the reference vectors.
//
// Run:
//   cargo run --bin vec3_demo

use vec3_ops::{cross, normalize, Vector3};

fn main() {
    let a0 = Vector3::new(0.0, 4.0, -3.0);
    let mut a = a0;
    normalize(&mut a);
    println!("normalize({a0}) = {a}");
    println!("  |a| = {}", a.length());

    // y × x = -z
    let j = Vector3::new(0.0, 1.0, 0.0);
    let i = Vector3::new(1.0, 0.0, 0.0);
    println!("cross({j}, {i}) = {}", cross(&j, &i));
}
