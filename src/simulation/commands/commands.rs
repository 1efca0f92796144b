use super::SimulationCore;

pub(super) fn add_sand(sim: &mut SimulationCore) -> u32 {
    sim.grid.add_sand(&mut sim.rng)
}

pub(super) fn remove_sand(sim: &mut SimulationCore) -> u32 {
    sim.grid.remove_sand(&mut sim.rng)
}

pub(super) fn clear(sim: &mut SimulationCore) {
    sim.grid.clear();
}
