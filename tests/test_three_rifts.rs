use riftsim::prelude::*;
use riftsim::StrError;
use russell_chk::assert_approx_eq;

// TEST GOAL
//
// This test verifies the bookkeeping of three sequential rifting episodes, in
// particular the stretching factor of the third episode relative to the
// previously thinned crust (β₁·β₂)
//
// CONFIGURATION AND PARAMETERS
//
// Crustal thickness TC = 30 km; water loading; final time 0 Ma
// Episodes: 160–140 Ma (β₁ = 1.5), 100–90 Ma (β₂ = 1.2), 40–30 Ma (β₃ = 1.1)

const NAME: &str = "test_three_rifts";

#[test]
fn test_three_rifts() -> Result<(), StrError> {
    // parameters
    let p = SampleParams::three_rifts();
    let sim = Simulation::new(&p)?;
    let episodes = sim.episodes(1.5)?;
    assert_eq!(episodes[2].beta_previous, 1.5 * 1.2);

    // run each beta by hand to check the carried state
    let mut table = OutputTable::new();
    let carries = sim.run_beta(1.5, &mut table)?;
    assert_eq!(carries.len(), 3);
    let (conbet, contrm) = (sim.derived.conbet, sim.derived.contrm);
    for (k, carry) in carries.iter().enumerate() {
        let beta = [1.5, 1.2, 1.1][k];
        let crustal = carry.subsidence_at_end - contrm * (0.5 - carry.trap_at_end);
        let expected = conbet * (2.0 - 1.0 / beta - 1.0 / episodes[k].beta_previous);
        assert_approx_eq!(crustal, expected, 1e-8);
        assert!(carry.baseline > carry.subsidence_at_end); // thermal subsidence after each rift
    }

    // full run
    let table = sim.run()?;
    let groups = table.groups();
    let curve = &groups[0];
    assert_approx_eq!(curve.last().unwrap().time, 0.0, 1e-9);
    for i in 1..curve.len() {
        assert!(curve[i].time < curve[i - 1].time);
    }

    // subsidence increases within each episode
    //
    // The crustal term of the third episode, CONBET·(2 - 1/βt - 1/(β₁·β₂)), is smaller than the
    // sum of the crustal terms of the first two episodes, thus the curve steps down at 40 Ma.
    let at = |t: f64| curve.iter().position(|x| f64::abs(x.time - t) < 1e-9).unwrap();
    let bounds = [(0, at(100.0)), (at(100.0), at(40.0)), (at(40.0) + 1, curve.len() - 1)];
    for (first, last) in bounds {
        for i in (first + 1)..=last {
            assert!(curve[i].subsidence >= curve[i - 1].subsidence);
        }
    }

    // strain rate of each episode
    let rate = |beta: f64, duration: f64| 1000.0 * f64::ln(beta) / duration;
    assert_approx_eq!(curve[at(140.0)].strain_rate, rate(1.5, 20.0), 1e-9);
    assert_approx_eq!(curve[at(90.0)].strain_rate, rate(1.2, 10.0), 1e-9);
    assert_approx_eq!(curve[at(30.0)].strain_rate, rate(1.1, 10.0), 1e-9);
    assert_eq!(curve[at(30.0) + 1].strain_rate, 0.0);

    table.write_dat(&format!("{}/{}.dat", DEFAULT_TEST_DIR, NAME))?;
    Ok(())
}
