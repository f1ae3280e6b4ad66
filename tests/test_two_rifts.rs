use riftsim::prelude::*;
use riftsim::StrError;
use russell_chk::assert_approx_eq;

// TEST GOAL
//
// This test verifies that two sequential rifting episodes produce a total
// subsidence close to (but not equal to) the subsidence of a single episode
// with the combined stretching factor
//
// CONFIGURATION AND PARAMETERS
//
// Crustal thickness TC = 30 km; water loading; final time 0 Ma
// Two episodes: 160–140 Ma with β₁ = 1.3 and 100–90 Ma with β₂ = 1.2
// Single episode: 160–140 Ma with β = 1.56

const NAME: &str = "test_two_rifts";

#[test]
fn test_two_rifts() -> Result<(), StrError> {
    // two episodes
    let mut p = SampleParams::two_rifts(1.3, 1.2);
    p.label = NAME.to_string();
    let table = run_simulation(&p)?;
    assert_eq!(table.n_groups(), 1);
    let groups = table.groups();
    let curve = &groups[0];

    // rows at the episode boundaries
    let at = |t: f64| curve.iter().position(|x| f64::abs(x.time - t) < 1e-9);
    let i_140 = at(140.0).unwrap();
    let i_100 = at(100.0).unwrap();
    let i_90 = at(90.0).unwrap();
    assert!(i_140 < i_100 && i_100 < i_90);
    assert_eq!(curve.iter().filter(|x| f64::abs(x.time - 100.0) < 1e-9).count(), 1);

    // time decreases and subsidence increases
    for i in 1..curve.len() {
        assert!(curve[i].time < curve[i - 1].time);
        assert!(curve[i].subsidence >= curve[i - 1].subsidence);
    }

    // the second episode stretches and heats the lithosphere again
    assert_eq!(curve[i_100].strain_rate, 0.0);
    let rate2 = 1000.0 * f64::ln(1.2) / 10.0; // 1/Gyr
    for i in (i_100 + 1)..=i_90 {
        assert_approx_eq!(curve[i].strain_rate, rate2, 1e-9);
        assert!(curve[i].heat_flow >= curve[i - 1].heat_flow);
    }
    for i in (i_90 + 1)..curve.len() {
        assert_eq!(curve[i].strain_rate, 0.0);
    }

    // single episode with the combined stretching factor
    let mut single = SampleParams::single_rift();
    single.sweep.beta_min = 1.56;
    single.sweep.beta_max = 1.56;
    single.episodes[0].t_end = 140.0;
    let single_table = run_simulation(&single)?;
    let s_single = single_table.groups()[0].last().unwrap().subsidence;
    let s_double = curve.last().unwrap().subsidence;
    let difference = f64::abs(s_double - s_single) / s_single;
    assert!(difference > 1e-3);
    assert!(difference < 0.2);

    table.write_dat(&format!("{}/{}.dat", DEFAULT_TEST_DIR, NAME))?;
    Ok(())
}
