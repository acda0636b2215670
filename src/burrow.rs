use {
    crate::*,
    nom::{
        branch::alt,
        bytes::complete::tag,
        character::complete::{line_ending, one_of},
        combinator::{map_opt, opt},
        error::Error,
        multi::many_m_n,
        sequence::{delimited, terminated, tuple},
        Err, IResult,
    },
    static_assertions::const_assert,
    std::{
        collections::HashMap,
        fmt::{Display, Formatter, Result as FmtResult},
        ops::Range,
    },
    strum::{EnumCount, EnumIter, IntoEnumIterator},
};

pub const HALLWAY_LEN: usize = 11_usize;
pub const SMALL_DEPTH: usize = 2_usize;
pub const LARGE_DEPTH: usize = 4_usize;

const TOP_WALL_STR: &str = "#############";
const BOTTOM_WALL_STR: &str = "  #########";

const_assert!(TOP_WALL_STR.len() == HALLWAY_LEN + 2_usize);

#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, EnumCount, EnumIter, Eq, PartialEq)]
#[repr(u8)]
pub enum Amphipod {
    Amber,
    Bronze,
    Copper,
    Desert,
}

impl Amphipod {
    pub const fn room_index(self) -> usize {
        self as usize
    }

    /// The hallway cell directly outside this amphipod's assigned side room. Amphipods pass
    /// through doorway cells freely but never come to rest on one.
    pub const fn doorway_hallway_index(self) -> usize {
        2_usize * self.room_index() + 2_usize
    }

    #[inline(always)]
    pub const fn energy_per_step(self) -> u32 {
        10_u32.pow(self as u32)
    }

    pub const fn cell(self) -> Cell {
        match self {
            Self::Amber => Cell::Amber,
            Self::Bronze => Cell::Bronze,
            Self::Copper => Cell::Copper,
            Self::Desert => Cell::Desert,
        }
    }

    const fn for_room_index(room_index: usize) -> Self {
        match room_index {
            0_usize => Self::Amber,
            1_usize => Self::Bronze,
            2_usize => Self::Copper,
            _ => Self::Desert,
        }
    }
}

// The right-most doorway needs a resting cell on either side of it
const_assert!(Amphipod::Desert.doorway_hallway_index() == HALLWAY_LEN - 3_usize);

const fn is_doorway(hallway_index: usize) -> bool {
    hallway_index >= 2_usize
        && hallway_index <= HALLWAY_LEN - 3_usize
        && hallway_index % 2_usize == 0_usize
}

#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Vacant = b'.',
    Amber = b'A',
    Bronze = b'B',
    Copper = b'C',
    Desert = b'D',
}

impl Cell {
    const STR: &'static str = ".ABCD";

    pub const fn amphipod(self) -> Option<Amphipod> {
        match self {
            Self::Vacant => None,
            Self::Amber => Some(Amphipod::Amber),
            Self::Bronze => Some(Amphipod::Bronze),
            Self::Copper => Some(Amphipod::Copper),
            Self::Desert => Some(Amphipod::Desert),
        }
    }
}

impl From<Cell> for char {
    fn from(value: Cell) -> Self {
        value as u8 as char
    }
}

impl Parse for Cell {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map_opt(one_of(Self::STR), |value: char| Self::try_from(value).ok())(input)
    }
}

impl TryFrom<char> for Cell {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '.' => Ok(Self::Vacant),
            'A' => Ok(Self::Amber),
            'B' => Ok(Self::Bronze),
            'C' => Ok(Self::Copper),
            'D' => Ok(Self::Desert),
            _ => Err(()),
        }
    }
}

/// One side room: index 0 is adjacent to the doorway, index `DEPTH - 1` is against the back wall.
#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct SideRoom<const DEPTH: usize>([Cell; DEPTH]);

impl<const DEPTH: usize> SideRoom<DEPTH> {
    const VACANT: Self = Self([Cell::Vacant; DEPTH]);

    /// The occupant nearest the doorway, the only one free to leave
    fn top(self) -> Option<(usize, Amphipod)> {
        self.0
            .into_iter()
            .enumerate()
            .find_map(|(depth_index, cell)| cell.amphipod().map(|amphipod| (depth_index, amphipod)))
    }

    /// No foreign amphipod blocks the room as a destination.
    fn is_clean(self, assigned: Amphipod) -> bool {
        self.0
            .into_iter()
            .all(|cell| cell == Cell::Vacant || cell == assigned.cell())
    }

    /// The room holds only its own type from its topmost occupant down to the back wall, so
    /// nothing in it is left to correct. An empty room is trivially settled.
    fn is_settled(self, assigned: Amphipod) -> bool {
        self.0
            .into_iter()
            .skip_while(|cell| *cell == Cell::Vacant)
            .all(|cell| cell == assigned.cell())
    }

    /// The deepest vacant cell, keeping the stack contiguous from the back wall
    fn deepest_vacant(self) -> Option<usize> {
        self.0.iter().rposition(|cell| *cell == Cell::Vacant)
    }
}

#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Burrow<const DEPTH: usize> {
    hallway: [Cell; HALLWAY_LEN],
    side_rooms: [SideRoom<DEPTH>; Amphipod::COUNT],
}

impl<const DEPTH: usize> Burrow<DEPTH> {
    const EMPTY: Self = Self {
        hallway: [Cell::Vacant; HALLWAY_LEN],
        side_rooms: [SideRoom::VACANT; Amphipod::COUNT],
    };

    /// The unique goal burrow for this depth: hallway vacant, every side room full of its own
    /// amphipod type
    pub const ORGANIZED: Self = Self::organized();

    const fn organized() -> Self {
        let mut organized: Self = Self::EMPTY;
        let mut room_index: usize = 0_usize;

        while room_index < Amphipod::COUNT {
            let cell: Cell = Amphipod::for_room_index(room_index).cell();
            let mut depth_index: usize = 0_usize;

            while depth_index < DEPTH {
                organized.side_rooms[room_index].0[depth_index] = cell;
                depth_index += 1_usize;
            }

            room_index += 1_usize;
        }

        organized
    }

    /// Whether every hallway cell between `from` (exclusive) and `to` (inclusive) is vacant
    fn is_hallway_clear(&self, from: usize, to: usize) -> bool {
        let range: Range<usize> = if from < to {
            from + 1_usize..to + 1_usize
        } else {
            to..from
        };

        self.hallway[range].iter().all(|cell| *cell == Cell::Vacant)
    }

    /// Invokes `f` with the energy cost and successor burrow of every legal single-amphipod move.
    ///
    /// Exactly two move families exist: a hallway amphipod entering its assigned side room (the
    /// path through the doorway is unobstructed and the room holds no foreign amphipod), and the
    /// topmost occupant of an unsettled side room walking out to any reachable non-doorway hallway
    /// cell. An amphipod changing rooms passes through the hallway as two separate moves.
    pub fn for_each_move<F: FnMut(u32, Self)>(&self, mut f: F) {
        for (hallway_index, cell) in self.hallway.into_iter().enumerate() {
            let Some(amphipod) = cell.amphipod() else {
                continue;
            };

            let room_index: usize = amphipod.room_index();
            let side_room: SideRoom<DEPTH> = self.side_rooms[room_index];
            let doorway_hallway_index: usize = amphipod.doorway_hallway_index();

            if self.is_hallway_clear(hallway_index, doorway_hallway_index)
                && side_room.is_clean(amphipod)
            {
                if let Some(depth_index) = side_room.deepest_vacant() {
                    let steps: usize =
                        hallway_index.abs_diff(doorway_hallway_index) + depth_index + 1_usize;
                    let mut successor: Self = *self;

                    successor.hallway[hallway_index] = Cell::Vacant;
                    successor.side_rooms[room_index].0[depth_index] = cell;
                    f(steps as u32 * amphipod.energy_per_step(), successor);
                }
            }
        }

        for (room_index, assigned) in Amphipod::iter().enumerate() {
            let side_room: SideRoom<DEPTH> = self.side_rooms[room_index];

            if side_room.is_settled(assigned) {
                continue;
            }

            let Some((depth_index, amphipod)) = side_room.top() else {
                continue;
            };

            let doorway_hallway_index: usize = assigned.doorway_hallway_index();
            let exit_steps: usize = depth_index + 1_usize;

            // Walk outward from the doorway until blocked, resting anywhere but a doorway.
            // Returns false once an occupied cell ends the walk in this direction.
            let mut try_rest = |hallway_index: usize| -> bool {
                if self.hallway[hallway_index] != Cell::Vacant {
                    return false;
                }

                if !is_doorway(hallway_index) {
                    let steps: usize = exit_steps + hallway_index.abs_diff(doorway_hallway_index);
                    let mut successor: Self = *self;

                    successor.side_rooms[room_index].0[depth_index] = Cell::Vacant;
                    successor.hallway[hallway_index] = amphipod.cell();
                    f(steps as u32 * amphipod.energy_per_step(), successor);
                }

                true
            };

            for hallway_index in (0_usize..doorway_hallway_index).rev() {
                if !try_rest(hallway_index) {
                    break;
                }
            }

            for hallway_index in doorway_hallway_index + 1_usize..HALLWAY_LEN {
                if !try_rest(hallway_index) {
                    break;
                }
            }
        }
    }

    /// An admissible lower bound on the remaining energy: every amphipod outside its assigned
    /// side room must at least walk out of its current room, cover the hallway distance to its
    /// doorway, and take one step down into its room.
    fn organize_energy_lower_bound(&self) -> u32 {
        let hallway_energy: u32 = self
            .hallway
            .iter()
            .enumerate()
            .filter_map(|(hallway_index, cell)| {
                cell.amphipod().map(|amphipod| {
                    (hallway_index.abs_diff(amphipod.doorway_hallway_index()) + 1_usize) as u32
                        * amphipod.energy_per_step()
                })
            })
            .sum();
        let side_room_energy: u32 = Amphipod::iter()
            .enumerate()
            .flat_map(|(room_index, assigned)| {
                self.side_rooms[room_index]
                    .0
                    .into_iter()
                    .enumerate()
                    .filter_map(move |(depth_index, cell)| {
                        cell.amphipod()
                            .filter(|amphipod| *amphipod != assigned)
                            .map(|amphipod| {
                                (depth_index
                                    + 1_usize
                                    + assigned
                                        .doorway_hallway_index()
                                        .abs_diff(amphipod.doorway_hallway_index())
                                    + 1_usize) as u32
                                    * amphipod.energy_per_step()
                            })
                    })
            })
            .sum();

        hallway_energy + side_room_energy
    }

    /// Each amphipod type appears exactly `DEPTH` times across the hallway and side rooms.
    fn has_full_population(&self) -> bool {
        Amphipod::iter().all(|amphipod| {
            let cell: Cell = amphipod.cell();

            self.hallway
                .iter()
                .chain(
                    self.side_rooms
                        .iter()
                        .flat_map(|side_room| side_room.0.iter()),
                )
                .filter(|burrow_cell| **burrow_cell == cell)
                .count()
                == DEPTH
        })
    }

    /// Computes the minimum total energy of any sequence of legal moves from this burrow to
    /// `ORGANIZED`, or `None` if no such sequence exists
    pub fn try_min_organize_energy(self) -> Option<u32> {
        OrganizeAmphipods {
            start: self,
            energies: HashMap::new(),
        }
        .run_dijkstra()
    }
}

fn parse_side_room_row<'i>(input: &'i str) -> IResult<&'i str, [Cell; Amphipod::COUNT]> {
    map_opt(
        delimited(
            alt((tag("###"), tag("  #"))),
            many_m_n(
                Amphipod::COUNT,
                Amphipod::COUNT,
                terminated(Cell::parse, tag("#")),
            ),
            tuple((opt(tag("##")), line_ending)),
        ),
        |cells: Vec<Cell>| cells.try_into().ok(),
    )(input)
}

impl<const DEPTH: usize> Parse for Burrow<DEPTH> {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map_opt(
            delimited(
                tuple((tag(TOP_WALL_STR), line_ending)),
                tuple((
                    delimited(
                        tag("#"),
                        many_m_n(HALLWAY_LEN, HALLWAY_LEN, Cell::parse),
                        tuple((tag("#"), line_ending)),
                    ),
                    many_m_n(DEPTH, DEPTH, parse_side_room_row),
                )),
                tuple((tag(BOTTOM_WALL_STR), opt(line_ending))),
            ),
            |(hallway_cells, side_room_rows): (Vec<Cell>, Vec<[Cell; Amphipod::COUNT]>)| {
                let hallway: [Cell; HALLWAY_LEN] = hallway_cells.try_into().ok()?;
                let mut burrow: Self = Self {
                    hallway,
                    side_rooms: [SideRoom::VACANT; Amphipod::COUNT],
                };

                for (depth_index, side_room_row) in side_room_rows.into_iter().enumerate() {
                    for (room_index, cell) in side_room_row.into_iter().enumerate() {
                        burrow.side_rooms[room_index].0[depth_index] = cell;
                    }
                }

                Some(burrow)
            },
        )(input)
    }
}

impl<const DEPTH: usize> Display for Burrow<DEPTH> {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        writeln!(f, "{TOP_WALL_STR}")?;
        write!(f, "#")?;

        for cell in self.hallway {
            write!(f, "{}", char::from(cell))?;
        }

        writeln!(f, "#")?;

        for depth_index in 0_usize..DEPTH {
            write!(
                f,
                "{}",
                if depth_index == 0_usize { "###" } else { "  #" }
            )?;

            for side_room in self.side_rooms {
                write!(f, "{}#", char::from(side_room.0[depth_index]))?;
            }

            writeln!(f, "{}", if depth_index == 0_usize { "##" } else { "" })?;
        }

        writeln!(f, "{BOTTOM_WALL_STR}")
    }
}

/// Uniform-cost search driver over the implicit graph of burrows and legal moves
///
/// `energies` records the lowest cost at which each discovered burrow has been enqueued, keyed by
/// structural equality; a burrow absent from the map has no known cost yet. The map lives for one
/// search run and is discarded with the driver.
struct OrganizeAmphipods<const DEPTH: usize> {
    start: Burrow<DEPTH>,
    energies: HashMap<Burrow<DEPTH>, u32>,
}

impl<const DEPTH: usize> WeightedGraphSearch for OrganizeAmphipods<DEPTH> {
    type Vertex = Burrow<DEPTH>;
    type Cost = u32;

    fn start(&self) -> &Burrow<DEPTH> {
        &self.start
    }

    fn is_end(&self, vertex: &Burrow<DEPTH>) -> bool {
        *vertex == Burrow::ORGANIZED
    }

    fn cost_from_start(&self, vertex: &Burrow<DEPTH>) -> Option<u32> {
        self.energies.get(vertex).copied()
    }

    fn heuristic(&self, vertex: &Burrow<DEPTH>) -> u32 {
        vertex.organize_energy_lower_bound()
    }

    fn neighbors(
        &self,
        vertex: &Burrow<DEPTH>,
        neighbors: &mut Vec<OpenSetElement<Burrow<DEPTH>, u32>>,
    ) {
        neighbors.clear();
        vertex.for_each_move(|energy, successor| neighbors.push(OpenSetElement(successor, energy)));
    }

    fn update_vertex(&mut self, _from: &Burrow<DEPTH>, to: &Burrow<DEPTH>, cost: u32) {
        self.energies.insert(*to, cost);
    }

    fn reset(&mut self) {
        self.energies.clear();
        self.energies.insert(self.start, 0_u32);
    }
}

pub type SmallBurrow = Burrow<SMALL_DEPTH>;
pub type LargeBurrow = Burrow<LARGE_DEPTH>;

/// A parsed start burrow, monomorphized over the two published side room depths
#[cfg_attr(test, derive(Debug, PartialEq))]
pub enum Solution {
    Small(SmallBurrow),
    Large(LargeBurrow),
}

impl Solution {
    pub fn try_min_organize_energy(&self) -> Option<u32> {
        match self {
            Self::Small(burrow) => burrow.try_min_organize_energy(),
            Self::Large(burrow) => burrow.try_min_organize_energy(),
        }
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Small(burrow) => Display::fmt(burrow, f),
            Self::Large(burrow) => Display::fmt(burrow, f),
        }
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        alt((
            map_opt(SmallBurrow::parse, |burrow| {
                burrow.has_full_population().then_some(Self::Small(burrow))
            }),
            map_opt(LargeBurrow::parse, |burrow| {
                burrow.has_full_population().then_some(Self::Large(burrow))
            }),
        ))(input)
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::sync::OnceLock};

    const SMALL_BURROW_STRS: &[&str] = &[
        concat!(
            "#############\n",
            "#...........#\n",
            "###B#C#B#D###\n",
            "  #A#D#C#A#\n",
            "  #########\n",
        ),
        concat!(
            "#############\n",
            "#...B.......#\n",
            "###B#C#.#D###\n",
            "  #A#D#C#A#\n",
            "  #########\n",
        ),
        concat!(
            "#############\n",
            "#...........#\n",
            "###A#B#C#D###\n",
            "  #A#B#C#D#\n",
            "  #########\n",
        ),
    ];

    const LARGE_BURROW_STR: &str = concat!(
        "#############\n",
        "#...........#\n",
        "###B#C#B#D###\n",
        "  #D#C#B#A#\n",
        "  #D#B#A#C#\n",
        "  #A#D#C#A#\n",
        "  #########\n",
    );

    fn small_burrow(index: usize) -> SmallBurrow {
        static ONCE_LOCK: OnceLock<Vec<SmallBurrow>> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| {
            SMALL_BURROW_STRS
                .iter()
                .copied()
                .map(|burrow_str| SmallBurrow::parse(burrow_str).unwrap().1)
                .collect()
        })[index]
    }

    fn large_burrow() -> LargeBurrow {
        LargeBurrow::parse(LARGE_BURROW_STR).unwrap().1
    }

    fn moves<const DEPTH: usize>(burrow: &Burrow<DEPTH>) -> Vec<(u32, Burrow<DEPTH>)> {
        let mut moves: Vec<(u32, Burrow<DEPTH>)> = Vec::new();

        burrow.for_each_move(|energy, successor| moves.push((energy, successor)));

        moves
    }

    fn amphipod_counts<const DEPTH: usize>(burrow: &Burrow<DEPTH>) -> [usize; Amphipod::COUNT] {
        let mut amphipod_counts: [usize; Amphipod::COUNT] = [0_usize; Amphipod::COUNT];

        for cell in burrow.hallway.iter().chain(
            burrow
                .side_rooms
                .iter()
                .flat_map(|side_room| side_room.0.iter()),
        ) {
            if let Some(amphipod) = cell.amphipod() {
                amphipod_counts[amphipod.room_index()] += 1_usize;
            }
        }

        amphipod_counts
    }

    #[test]
    fn test_burrow_parse() {
        assert_eq!(
            small_burrow(0_usize),
            Burrow {
                hallway: [Cell::Vacant; HALLWAY_LEN],
                side_rooms: [
                    SideRoom([Cell::Bronze, Cell::Amber]),
                    SideRoom([Cell::Copper, Cell::Desert]),
                    SideRoom([Cell::Bronze, Cell::Copper]),
                    SideRoom([Cell::Desert, Cell::Amber]),
                ],
            }
        );
        assert_eq!(small_burrow(2_usize), SmallBurrow::ORGANIZED);
        assert!(Burrow::<3_usize>::parse(SMALL_BURROW_STRS[0_usize]).is_err());
    }

    #[test]
    fn test_burrow_display() {
        for (index, burrow_str) in SMALL_BURROW_STRS.iter().copied().enumerate() {
            assert_eq!(small_burrow(index).to_string(), burrow_str);
        }

        assert_eq!(large_burrow().to_string(), LARGE_BURROW_STR);
    }

    #[test]
    fn test_for_each_move_conserves_amphipods() {
        fn test_burrow<const DEPTH: usize>(burrow: &Burrow<DEPTH>) {
            let counts: [usize; Amphipod::COUNT] = amphipod_counts(burrow);

            for (energy, successor) in moves(burrow) {
                assert!(energy > 0_u32);
                assert_eq!(amphipod_counts(&successor), counts);

                for amphipod in Amphipod::iter() {
                    assert_eq!(
                        successor.hallway[amphipod.doorway_hallway_index()],
                        Cell::Vacant
                    );
                }
            }
        }

        for index in 0_usize..SMALL_BURROW_STRS.len() {
            test_burrow(&small_burrow(index));
        }

        test_burrow(&large_burrow());
    }

    #[test]
    fn test_organized_is_fixed_point() {
        assert!(moves(&SmallBurrow::ORGANIZED).is_empty());
        assert!(moves(&LargeBurrow::ORGANIZED).is_empty());
    }

    #[test]
    fn test_for_each_move_counts() {
        // Empty hallway, no room settled: each of the four tops can rest on each of the seven
        // non-doorway hallway cells.
        assert_eq!(moves(&small_burrow(0_usize)).len(), 28_usize);

        // The bronze amphipod at hallway cell 3 blocks walks past it and its own room is
        // unclean; room 2 is settled.
        assert_eq!(moves(&small_burrow(1_usize)).len(), 10_usize);
    }

    #[test]
    fn test_room_to_hallway_move_energy() {
        let mut expected: SmallBurrow = small_burrow(0_usize);

        expected.side_rooms[0_usize].0[0_usize] = Cell::Vacant;
        expected.hallway[3_usize] = Cell::Bronze;

        // One step out of the room plus one hallway step, at 10 energy per step
        assert!(moves(&small_burrow(0_usize)).contains(&(20_u32, expected)));
    }

    #[test]
    fn test_settled_side_room_emits_no_moves() {
        let mut burrow: SmallBurrow = SmallBurrow::ORGANIZED;

        burrow.side_rooms[0_usize].0[0_usize] = Cell::Vacant;
        burrow.hallway[0_usize] = Cell::Amber;

        // The half-full amber room is settled, so the only legal move is the hallway amber
        // walking two cells to the doorway and one step down.
        assert_eq!(moves(&burrow), vec![(3_u32, SmallBurrow::ORGANIZED)]);
    }

    #[test]
    fn test_try_min_organize_energy() {
        assert_eq!(small_burrow(0_usize).try_min_organize_energy(), Some(12521_u32));

        // Deterministic across runs
        assert_eq!(small_burrow(0_usize).try_min_organize_energy(), Some(12521_u32));
    }

    #[test]
    fn test_try_min_organize_energy_organized_start() {
        assert_eq!(SmallBurrow::ORGANIZED.try_min_organize_energy(), Some(0_u32));
    }

    #[test]
    fn test_large_try_min_organize_energy() {
        assert_eq!(large_burrow().try_min_organize_energy(), Some(44169_u32));
    }

    #[test]
    fn test_run_a_star_matches_run_dijkstra() {
        assert_eq!(
            OrganizeAmphipods {
                start: small_burrow(0_usize),
                energies: HashMap::new(),
            }
            .run_a_star(),
            Some(12521_u32)
        );
    }

    #[test]
    fn test_pruned_move_generator_is_unreachable() {
        // A move generator that emits nothing exhausts the frontier without reaching the goal.
        struct PrunedOrganizeAmphipods(OrganizeAmphipods<SMALL_DEPTH>);

        impl WeightedGraphSearch for PrunedOrganizeAmphipods {
            type Vertex = SmallBurrow;
            type Cost = u32;

            fn start(&self) -> &SmallBurrow {
                self.0.start()
            }

            fn is_end(&self, vertex: &SmallBurrow) -> bool {
                self.0.is_end(vertex)
            }

            fn cost_from_start(&self, vertex: &SmallBurrow) -> Option<u32> {
                self.0.cost_from_start(vertex)
            }

            fn heuristic(&self, vertex: &SmallBurrow) -> u32 {
                self.0.heuristic(vertex)
            }

            fn neighbors(
                &self,
                _vertex: &SmallBurrow,
                neighbors: &mut Vec<OpenSetElement<SmallBurrow, u32>>,
            ) {
                neighbors.clear();
            }

            fn update_vertex(&mut self, from: &SmallBurrow, to: &SmallBurrow, cost: u32) {
                self.0.update_vertex(from, to, cost);
            }

            fn reset(&mut self) {
                self.0.reset();
            }
        }

        assert_eq!(
            PrunedOrganizeAmphipods(OrganizeAmphipods {
                start: small_burrow(0_usize),
                energies: HashMap::new(),
            })
            .run_dijkstra(),
            None
        );
    }

    #[test]
    fn test_solution_try_from_str() {
        assert_eq!(
            Solution::try_from(SMALL_BURROW_STRS[0_usize]).ok(),
            Some(Solution::Small(small_burrow(0_usize)))
        );
        assert_eq!(
            Solution::try_from(LARGE_BURROW_STR).ok(),
            Some(Solution::Large(large_burrow()))
        );

        // A missing amphipod fails the population check even though the diagram parses
        assert!(Solution::try_from(concat!(
            "#############\n",
            "#...........#\n",
            "###B#C#B#D###\n",
            "  #.#D#C#A#\n",
            "  #########\n",
        ))
        .is_err());

        // Three side room rows match neither published depth
        assert!(Solution::try_from(concat!(
            "#############\n",
            "#...........#\n",
            "###B#C#B#D###\n",
            "  #B#C#A#D#\n",
            "  #A#D#C#A#\n",
            "  #########\n",
        ))
        .is_err());
    }
}
