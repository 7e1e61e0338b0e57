//! K-means on a small 2D dataset of custom observations.
//!
//! Run with `RUST_LOG=debug` to see the iteration log.

use std::borrow::Cow;

use lloyd::{Kmeans, Observation};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug)]
struct City {
    name: &'static str,
    lat: f64,
    lon: f64,
}

impl Observation for City {
    fn coordinates(&self) -> Cow<'_, [f64]> {
        Cow::Owned(vec![self.lat, self.lon])
    }
}

fn main() {
    env_logger::init();

    let cities = vec![
        // Western Europe
        City { name: "Paris", lat: 48.9, lon: 2.4 },
        City { name: "Brussels", lat: 50.8, lon: 4.4 },
        City { name: "Amsterdam", lat: 52.4, lon: 4.9 },
        // East Asia
        City { name: "Tokyo", lat: 35.7, lon: 139.7 },
        City { name: "Seoul", lat: 37.6, lon: 127.0 },
        City { name: "Osaka", lat: 34.7, lon: 135.5 },
        // South America
        City { name: "Lima", lat: -12.0, lon: -77.0 },
        City { name: "Quito", lat: -0.2, lon: -78.5 },
        City { name: "Bogota", lat: 4.7, lon: -74.1 },
    ];

    let model = Kmeans::new(3).with_delta_threshold(1e-3).with_max_iter(100);
    let mut rng = StdRng::seed_from_u64(7);
    let fit = match model.fit(&cities, Some(&mut rng)) {
        Ok(fit) => fit,
        Err(e) => {
            eprintln!("k-means failed: {e}");
            return;
        }
    };

    println!(
        "=== K-means (k=3): {:?} after {} iterations, inertia {:.2} ===",
        fit.termination(),
        fit.iterations(),
        fit.inertia(&cities)
    );
    for (j, group) in fit.clusters(&cities).iter().enumerate() {
        let c = &fit.centroids()[j];
        let names: Vec<&str> = group.iter().map(|city| city.name).collect();
        println!("  cluster {j} at ({:6.1}, {:6.1}) => {}", c[0], c[1], names.join(", "));
    }
}
