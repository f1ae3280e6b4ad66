use riftsim::prelude::*;
use riftsim::StrError;
use russell_chk::assert_approx_eq;

// TEST GOAL
//
// This test verifies the correction of the subsidence for a basin filled by
// compacting sediment
//
// CONFIGURATION AND PARAMETERS
//
// Crustal thickness TC = 30 km; final time 0 Ma
// Rifting from 160 Ma to 100 Ma with β = 2 (constant strain rate)
// Sediment density ρs = 2.6; surface porosity φ₀ = 0.6; decay length λ = 2 km

const NAME: &str = "test_compaction";

fn final_subsidence(table: &OutputTable) -> f64 {
    table.groups()[0].last().unwrap().subsidence
}

#[test]
fn test_compaction() -> Result<(), StrError> {
    // parameters
    let mut p = SampleParams::compacting_sediment();
    p.label = NAME.to_string();

    // air-loaded curve (before compaction)
    let mut sim = Simulation::new(&p)?;
    let compaction = sim.compaction.take().unwrap();
    let raw = sim.run()?;

    // compacted curve
    let table = run_simulation(&p)?;
    let mut corrected = raw.clone();
    compaction.apply(&mut corrected)?;
    assert_eq!(corrected.rows, table.rows);

    // bounds given by air-loaded and (non-porous) sediment-loaded basins
    let mut air = SampleParams::single_rift();
    air.loading = Loading::Air;
    let mut sediment = SampleParams::single_rift();
    sediment.loading = Loading::Sediment;
    let s_air = final_subsidence(&run_simulation(&air)?);
    let s_sediment = final_subsidence(&run_simulation(&sediment)?);
    let s_compacted = final_subsidence(&table);
    assert_approx_eq!(final_subsidence(&raw), s_air, 1e-12);
    assert!(s_compacted > s_air);
    assert!(s_compacted < s_sediment);

    // the compacted depth is a fixed point of the correction
    let raw_groups = raw.groups();
    let groups = table.groups();
    for (x, y) in raw_groups[0].iter().zip(groups[0].iter()) {
        assert_eq!(x.time, y.time);
        assert_eq!(x.heat_flow, y.heat_flow);
        let again = compaction.solve_from(x.subsidence, y.subsidence)?;
        assert!(f64::abs(again - y.subsidence) < 1e-5);
    }

    // the compacted curve increases monotonically
    for i in 1..groups[0].len() {
        assert!(groups[0][i].subsidence >= groups[0][i - 1].subsidence);
    }

    table.write_dat(&format!("{}/{}.dat", DEFAULT_TEST_DIR, NAME))?;
    Ok(())
}

#[test]
fn test_compaction_without_porosity() -> Result<(), StrError> {
    // without porosity, the compacted basin equals the sediment-loaded basin
    let mut p = SampleParams::compacting_sediment();
    if let Some(param) = p.compaction.as_mut() {
        param.porosity = 0.0;
    }
    let mut sediment = SampleParams::single_rift();
    sediment.loading = Loading::Sediment;
    let a = run_simulation(&p)?;
    let b = run_simulation(&sediment)?;
    let (ga, gb) = (a.groups(), b.groups());
    for (x, y) in ga[0].iter().zip(gb[0].iter()) {
        assert_approx_eq!(x.subsidence, y.subsidence, 1e-9);
    }
    Ok(())
}
