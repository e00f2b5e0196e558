use std::{error::Error, fs::File, io::BufWriter};

use amoeba::{observers::TrackingObserver, prelude::*, test_functions::CrossedParabolas};

fn main() -> Result<(), Box<dyn Error>> {
    let problem = CrossedParabolas::default();

    // Search for the 2 variables of the problem, unconstrained.
    let mut nm = NelderMead::new(2, &problem, None)?;
    nm.set_max_iterations(100_000);

    for tolerance in [1e-6, 1e-12] {
        println!("Trying Nelder-Mead with tolerance {tolerance:e}");
        let results = nm.search(&[1.0, 1.0], tolerance, 1.0)?;
        println!("{results}\n");
    }

    // Repeat the tight search, clamping every vertex into [-600, 600] and recording the simplex
    // at each iteration.
    let bounds = Bounds::from(vec![(-600.0, 600.0), (-600.0, 600.0)]);
    let tracker = TrackingObserver::build();
    let mut nm = NelderMead::new(2, &problem, Some(&bounds))?
        .with_config(NelderMeadConfig::default().with_max_iterations(100_000))
        .with_observer(tracker.clone());
    println!("Trying bounded Nelder-Mead with tolerance 1e-12");
    let results = nm.search(&[1.0, 1.0], 1e-12, 1.0)?;
    println!("{results}");

    // Export the simplex history to a Python pickle file
    let file = File::create("data.pkl")?;
    let mut writer = BufWriter::new(file);
    serde_pickle::to_writer(&mut writer, &*tracker.read(), Default::default())?;
    println!("Wrote {} simplices to data.pkl", tracker.read().simplices.len());
    Ok(())
}
