use std::sync::Arc;

use color_eyre::eyre::{bail, eyre, Result, WrapErr};
use courier_game_types::{Agent, Grid, Package, Vertex, World};

/// A parsed problem definition.
///
/// The format is line-oriented: `#X`/`#Y` give the grid bounds, `#P` a
/// package as pickup `x y t` then delivery `x y t`, `#B` a blocked edge as
/// two vertices, and `#A` a courier start as `x y n` with n in {1, 2}. Lines
/// starting with anything else are ignored.
#[derive(Debug)]
pub(crate) struct Problem {
    pub x_max: i32,
    pub y_max: i32,
    pub packages: Vec<Package>,
    pub blocked_edges: Vec<(Vertex, Vertex)>,
    pub agent_one: Vertex,
    pub agent_two: Vertex,
}

impl Problem {
    pub(crate) fn parse(text: &str) -> Result<Self> {
        let mut x_max = None;
        let mut y_max = None;
        let mut packages = Vec::new();
        let mut blocked_edges = Vec::new();
        let mut agent_one = None;
        let mut agent_two = None;

        for (index, line) in text.lines().enumerate() {
            let line_number = index + 1;
            let mut tokens = line.split_whitespace();
            let Some(tag) = tokens.next() else {
                continue;
            };

            match tag {
                "#X" => {
                    if x_max.is_some() {
                        bail!("line {line_number}: #X given twice");
                    }
                    x_max = Some(parse_ints::<1>(tokens, line_number)?[0]);
                }
                "#Y" => {
                    if y_max.is_some() {
                        bail!("line {line_number}: #Y given twice");
                    }
                    y_max = Some(parse_ints::<1>(tokens, line_number)?[0]);
                }
                "#P" => {
                    let [px, py, pt, dx, dy, dt] = parse_ints::<6>(tokens, line_number)?;
                    let pickup_time = time_value(pt, line_number)?;
                    let delivery_time = time_value(dt, line_number)?;
                    packages.push(Package::new(
                        Vertex::new(px, py),
                        pickup_time,
                        Vertex::new(dx, dy),
                        delivery_time,
                    ));
                }
                "#B" => {
                    let [ax, ay, bx, by] = parse_ints::<4>(tokens, line_number)?;
                    blocked_edges.push((Vertex::new(ax, ay), Vertex::new(bx, by)));
                }
                "#A" => {
                    let [x, y, number] = parse_ints::<3>(tokens, line_number)?;
                    let slot = match number {
                        1 => &mut agent_one,
                        2 => &mut agent_two,
                        other => bail!("line {line_number}: unknown courier number {other}"),
                    };
                    if slot.is_some() {
                        bail!("line {line_number}: courier {number} given twice");
                    }
                    *slot = Some(Vertex::new(x, y));
                }
                _ => {}
            }
        }

        Ok(Self {
            x_max: x_max.ok_or_else(|| eyre!("missing #X grid bound"))?,
            y_max: y_max.ok_or_else(|| eyre!("missing #Y grid bound"))?,
            packages,
            blocked_edges,
            agent_one: agent_one.ok_or_else(|| eyre!("missing #A record for courier 1"))?,
            agent_two: agent_two.ok_or_else(|| eyre!("missing #A record for courier 2"))?,
        })
    }

    /// Builds the initial world, rejecting any coordinate outside the grid.
    pub(crate) fn to_world(&self) -> Result<World> {
        let grid = Grid::build(self.x_max, self.y_max, &self.blocked_edges)
            .wrap_err("invalid grid configuration")?;

        for (label, vertex) in [("courier 1", self.agent_one), ("courier 2", self.agent_two)] {
            if !grid.contains(vertex) {
                bail!("{label} starts at {vertex}, outside the grid");
            }
        }
        for package in &self.packages {
            for (label, vertex) in [
                ("pickup", package.pickup_location),
                ("delivery", package.delivery_location),
            ] {
                if !grid.contains(vertex) {
                    bail!("package {label} vertex {vertex} is outside the grid");
                }
            }
        }

        Ok(World::new(
            Arc::new(grid),
            Agent::at(self.agent_one),
            Agent::at(self.agent_two),
            self.packages.clone(),
        ))
    }
}

fn parse_ints<'a, const N: usize>(
    tokens: impl Iterator<Item = &'a str>,
    line_number: usize,
) -> Result<[i32; N]> {
    let values: Vec<i32> = tokens
        .map(|token| {
            token
                .parse()
                .wrap_err_with(|| format!("line {line_number}: {token:?} is not an integer"))
        })
        .collect::<Result<_>>()?;

    values
        .try_into()
        .map_err(|values: Vec<i32>| {
            eyre!(
                "line {line_number}: expected {N} values, got {}",
                values.len()
            )
        })
}

fn time_value(value: i32, line_number: usize) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| eyre!("line {line_number}: time {value} must be non-negative"))
}

#[cfg(test)]
mod tests {
    use courier_game_types::PackageStatus;

    use super::*;

    const EXAMPLE: &str = include_str!("../fixtures/example.txt");

    #[test]
    fn parses_the_example_problem() {
        let problem = Problem::parse(EXAMPLE).unwrap();

        assert_eq!(problem.x_max, 2);
        assert_eq!(problem.y_max, 2);
        assert_eq!(problem.agent_one, Vertex::new(0, 0));
        assert_eq!(problem.agent_two, Vertex::new(2, 2));
        assert_eq!(problem.blocked_edges, vec![(Vertex::new(1, 0), Vertex::new(2, 0))]);

        assert_eq!(problem.packages.len(), 1);
        let package = &problem.packages[0];
        assert_eq!(package.pickup_location, Vertex::new(0, 0));
        assert_eq!(package.pickup_time, 0);
        assert_eq!(package.delivery_location, Vertex::new(2, 1));
        assert_eq!(package.delivery_time, 3);
    }

    #[test]
    fn example_world_starts_with_the_package_collected() {
        let world = Problem::parse(EXAMPLE).unwrap().to_world().unwrap();
        assert_eq!(
            world.packages()[0].status,
            PackageStatus::PickedUp(courier_game_types::AgentId::One)
        );
        assert!(!world
            .grid()
            .neighbors(Vertex::new(1, 0))
            .contains(&Vertex::new(2, 0)));
    }

    #[test]
    fn unrecognized_lines_are_ignored() {
        let text = "// a comment\n#X 1\n#Y 1\n#A 0 0 1\n#A 1 1 2\n";
        let problem = Problem::parse(text).unwrap();
        assert_eq!(problem.x_max, 1);
        assert!(problem.packages.is_empty());
    }

    #[test]
    fn missing_records_are_fatal() {
        assert!(Problem::parse("#Y 1\n#A 0 0 1\n#A 1 1 2\n").is_err());
        assert!(Problem::parse("#X 1\n#Y 1\n#A 0 0 1\n").is_err());
    }

    #[test]
    fn duplicate_and_unknown_couriers_are_fatal() {
        assert!(Problem::parse("#X 1\n#Y 1\n#A 0 0 1\n#A 1 1 1\n").is_err());
        assert!(Problem::parse("#X 1\n#Y 1\n#A 0 0 1\n#A 1 1 3\n").is_err());
    }

    #[test]
    fn malformed_numbers_are_fatal() {
        assert!(Problem::parse("#X one\n#Y 1\n#A 0 0 1\n#A 1 1 2\n").is_err());
        assert!(Problem::parse("#X 1\n#Y 1\n#P 0 0 0 1\n#A 0 0 1\n#A 1 1 2\n").is_err());
        assert!(Problem::parse("#X 1\n#Y 1\n#P 0 0 -2 1 1 3\n#A 0 0 1\n#A 1 1 2\n").is_err());
    }

    #[test]
    fn out_of_grid_configuration_is_fatal() {
        // blocked edge outside the grid
        let text = "#X 1\n#Y 1\n#B 0 0 5 0\n#A 0 0 1\n#A 1 1 2\n";
        assert!(Problem::parse(text).unwrap().to_world().is_err());

        // courier outside the grid
        let text = "#X 1\n#Y 1\n#A 4 4 1\n#A 1 1 2\n";
        assert!(Problem::parse(text).unwrap().to_world().is_err());

        // package vertex outside the grid
        let text = "#X 1\n#Y 1\n#P 0 0 0 9 9 5\n#A 0 0 1\n#A 1 1 2\n";
        assert!(Problem::parse(text).unwrap().to_world().is_err());
    }
}
