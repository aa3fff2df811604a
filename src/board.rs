use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::fmt;
use itertools::Itertools;
use log::{debug, trace};

pub use crate::error::{BoardError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content {
    Mine,
    Empty
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnowledgeState {
    Unknown,
    Flag,
    Known
}

impl KnowledgeState {
    pub fn is_known(&self) -> bool{
        match *self {
            KnowledgeState::Known => true,
            _ => false
        }
    }

    pub fn is_flag(&self) -> bool{
        match *self {
            KnowledgeState::Flag => true,
            _ => false
        }
    }

    pub fn is_unknown(&self) -> bool{
        match *self {
            KnowledgeState::Unknown => true,
            _ => false
        }
    }
}

/// What a single cell shows on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Hidden,
    Flagged,
    Count(usize),
    Mine,
    Exploded
}

impl Symbol {
    pub fn glyph(&self) -> String {
        match *self {
            Symbol::Hidden => String::from("■"),
            Symbol::Flagged => String::from("#"),
            Symbol::Count(n) => n.to_string(),
            Symbol::Mine => String::from("B"),
            Symbol::Exploded => String::from("X")
        }
    }
}

#[derive(Debug)]
pub struct Cell {
    pub content: Content,
    pub mined_neighbor_count: usize,
    pub knowledge: KnowledgeState,
    pub point: Point,
    exploded: bool
}

impl Cell {
    fn create_empty(point: Point) -> Cell {
        Cell{content: Content::Empty, mined_neighbor_count: 0, knowledge: KnowledgeState::Unknown, point, exploded: false}
    }

    pub fn has_mine(&self) -> bool {
        self.content == Content::Mine
    }

    pub fn is_revealed(&self) -> bool {
        self.knowledge.is_known()
    }

    pub fn toggle_flag(&mut self){
        let new_state = match self.knowledge {
            KnowledgeState::Known => KnowledgeState::Known,
            KnowledgeState::Flag => KnowledgeState::Unknown,
            KnowledgeState::Unknown => KnowledgeState::Flag
        };
        self.knowledge = new_state;
    }

    pub fn symbol(&self) -> Symbol {
        match (&self.knowledge, &self.content) {
            (KnowledgeState::Flag, _) => Symbol::Flagged,
            (KnowledgeState::Unknown, _) => Symbol::Hidden,
            (KnowledgeState::Known, Content::Mine) => {
                if self.exploded { Symbol::Exploded } else { Symbol::Mine }
            }
            (KnowledgeState::Known, Content::Empty) => Symbol::Count(self.mined_neighbor_count)
        }
    }

    /// The symbol with nothing hidden, for the cheat view.
    fn exposed_symbol(&self) -> Symbol {
        match self.content {
            Content::Mine if self.exploded => Symbol::Exploded,
            Content::Mine => Symbol::Mine,
            Content::Empty => Symbol::Count(self.mined_neighbor_count)
        }
    }
}

/// Row first, column second, both zero based.
#[derive(Debug, Eq, PartialEq, Clone, Hash, Copy)]
pub struct Point(pub usize, pub usize);

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", row_label(self.0), self.1 + 1)
    }
}

fn row_label(row: usize) -> char {
    std::char::from_u32('A' as u32 + row as u32).unwrap_or('?')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSize {
    pub rows: usize,
    pub cols: usize
}

impl BoardSize {
    pub fn area(&self) -> usize {
        self.rows * self.cols
    }

    pub fn contains(&self, point: &Point) -> bool {
        point.0 < self.rows && point.1 < self.cols
    }

    pub fn points(&self) -> Vec<Point> {
        (0..self.area()).filter_map(|x| self.point_from_integer(x)).collect()
    }

    pub fn point_from_integer(&self, x: usize) -> Option<Point> {
        if x >= self.area() {
            return None
        }
        Some(Point(x/self.cols, x%self.cols))
    }

    /// Bounds-checks a row index and a 1-based column as typed by the player.
    pub fn locate(&self, row: usize, column: usize) -> Result<Point> {
        if row >= self.rows {
            return Err(BoardError::InvalidRow { last: row_label(self.rows.saturating_sub(1)) })
        }
        match column.checked_sub(1) {
            Some(col) if col < self.cols => Ok(Point(row, col)),
            _ => Err(BoardError::InvalidColumn { cols: self.cols })
        }
    }
}

fn sample_points<R: Rng + ?Sized>(size: &BoardSize, n: usize, rng: &mut R) -> Result<Vec<Point>>{
    if n >= size.area() {
        return Err(BoardError::TooManyMines { mines: n, cells: size.area() })
    }
    let mut possible: Vec<usize> = (0..size.area()).collect();
    possible.shuffle(rng);
    Ok(possible.into_iter()
        .take(n)
        .filter_map(|x| size.point_from_integer(x))
        .collect())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Uninitialized,
    MinesPlaced,
    InProgress,
    Won,
    Lost
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        match *self {
            GameStatus::Won | GameStatus::Lost => true,
            _ => false
        }
    }
}

/// Result of opening a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    Exploded,
    Opened(usize)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagChange {
    Placed,
    Removed
}

pub struct Board {
    pub size: BoardSize,
    field: Vec<Vec<Cell>>,
    mine_count: usize,
    status: GameStatus,
    safe_remaining: usize,
    flags_remaining: usize,
    correct_flags: usize
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, Cell::symbol)
    }
}

/// Whole-grid view returned by [`Board::reveal_all`].
pub struct Exposed<'a>(&'a Board);

impl fmt::Display for Exposed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f, Cell::exposed_symbol)
    }
}

impl Board {
    pub fn new(rows: usize, cols: usize) -> Board {
        let size = BoardSize{rows, cols};
        let mut field = Vec::with_capacity(size.rows);
        for i in 0..size.rows {
            let mut row_vec = Vec::with_capacity(size.cols);
            for j in 0..size.cols {
                row_vec.push(Cell::create_empty(Point(i, j)));
            }
            field.push(row_vec);
        }

        Board {
            size,
            field,
            mine_count: 0,
            status: GameStatus::Uninitialized,
            safe_remaining: size.area(),
            flags_remaining: 0,
            correct_flags: 0
        }
    }

    /// A fresh board with `mine_count` mines scattered at random.
    pub fn seeded<R: Rng + ?Sized>(rows: usize, cols: usize, mine_count: usize, rng: &mut R) -> Result<Board> {
        let mut board = Board::new(rows, cols);
        board.place_mines(mine_count, rng)?;
        Ok(board)
    }

    /// A fresh board with mines exactly at `mines`.
    pub fn with_mines(rows: usize, cols: usize, mines: &[Point]) -> Result<Board> {
        let mut board = Board::new(rows, cols);
        let unique: HashSet<&Point> = mines.iter().collect();
        if unique.len() != mines.len() || !mines.iter().all(|p| board.size.contains(p)) {
            return Err(BoardError::InvalidLayout)
        }
        if mines.len() >= board.size.area() {
            return Err(BoardError::TooManyMines { mines: mines.len(), cells: board.size.area() })
        }
        board.arm(mines);
        Ok(board)
    }

    pub fn place_mines<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Result<()> {
        if self.status != GameStatus::Uninitialized {
            return Err(BoardError::AlreadySeeded)
        }
        let points = sample_points(&self.size, count, rng)?;
        self.arm(&points);
        Ok(())
    }

    fn arm(&mut self, mines: &[Point]) {
        for point in mines {
            self.retrieve_cell_mutable(point).content = Content::Mine;
        }
        for point in self.size.points() {
            let count = self.adjacent_mine_count(&point);
            self.retrieve_cell_mutable(&point).mined_neighbor_count = count;
        }
        self.mine_count = mines.len();
        self.safe_remaining = self.size.area() - mines.len();
        self.flags_remaining = mines.len();
        self.correct_flags = 0;
        self.status = GameStatus::MinesPlaced;
        debug!("placed {} mines on a {}x{} board", mines.len(), self.size.rows, self.size.cols);
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    pub fn is_lost(&self) -> bool {
        self.status == GameStatus::Lost
    }

    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    pub fn flags_remaining(&self) -> usize {
        self.flags_remaining
    }

    /// Safe cells that still have to be opened.
    pub fn safe_remaining(&self) -> usize {
        self.safe_remaining
    }

    /// Flags currently standing on a mine.
    pub fn correct_flags(&self) -> usize {
        self.correct_flags
    }

    pub fn retrieve_cell(&self, point: &Point) -> &Cell{
        &self.field[point.0][point.1]
    }

    fn retrieve_cell_mutable(&mut self, point: &Point) -> &mut Cell{
        &mut self.field[point.0][point.1]
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.field.iter().flatten()
    }

    pub fn mine_points(&self) -> Vec<Point> {
        self.cells().filter(|cell| cell.has_mine()).map(|cell| cell.point).collect()
    }

    pub fn neighbor_points(&self, point: &Point) -> Vec<Point>{
        let (rows, cols) = (self.size.rows as i64, self.size.cols as i64);
        (-1i64..2).cartesian_product(-1i64..2)
            .filter(|&(i, j)| i != 0 || j != 0)
            .map(|(i, j)| (point.0 as i64 + i, point.1 as i64 + j))
            .filter(|&(r, c)| r >= 0 && r < rows && c >= 0 && c < cols)
            .map(|(r, c)| Point(r as usize, c as usize))
            .collect()
    }

    pub fn adjacent_mine_count(&self, point: &Point) -> usize {
        self.neighbor_points(point).iter()
            .filter(|neighbor| self.retrieve_cell(neighbor).has_mine())
            .count()
    }

    fn ensure_playable(&self) -> Result<()> {
        match self.status {
            GameStatus::Uninitialized => Err(BoardError::NotSeeded),
            GameStatus::Won | GameStatus::Lost => Err(BoardError::GameOver),
            _ => Ok(())
        }
    }

    /// Preconditions checked before a player opens `point`.
    pub fn validate_open(&self, point: &Point) -> Result<()> {
        match self.retrieve_cell(point).knowledge {
            KnowledgeState::Known => Err(BoardError::AlreadyRevealed),
            KnowledgeState::Flag => Err(BoardError::AlreadyFlagged),
            KnowledgeState::Unknown => Ok(())
        }
    }

    pub fn reveal(&mut self, point: &Point) -> Result<Reveal> {
        self.ensure_playable()?;
        let cell = self.retrieve_cell(point);
        if cell.knowledge.is_flag() {
            return Err(BoardError::AlreadyFlagged)
        }
        if cell.knowledge.is_known() {
            return Ok(Reveal::Opened(0))
        }
        let on_mine = cell.has_mine();
        self.status = GameStatus::InProgress;
        if on_mine {
            self.explode(point);
            return Ok(Reveal::Exploded)
        }
        let opened = self.flood_reveal(*point);
        self.settle();
        Ok(Reveal::Opened(opened))
    }

    fn flood_reveal(&mut self, start: Point) -> usize {
        let mut pending = vec![start];
        let mut opened = 0;
        while let Some(point) = pending.pop() {
            let is_null = {
                let cell = self.retrieve_cell_mutable(&point);
                if !cell.knowledge.is_unknown() || cell.has_mine() {
                    continue
                }
                cell.knowledge = KnowledgeState::Known;
                cell.mined_neighbor_count == 0
            };
            opened += 1;
            if is_null {
                let next: Vec<Point> = self.neighbor_points(&point).into_iter()
                    .filter(|neighbor| self.retrieve_cell(neighbor).knowledge.is_unknown())
                    .collect();
                pending.extend(next);
            }
        }
        self.safe_remaining -= opened;
        trace!("opening {} revealed {} cells, {} safe cells left", start, opened, self.safe_remaining);
        opened
    }

    fn explode(&mut self, point: &Point) {
        for cell in self.field.iter_mut().flatten().filter(|cell| cell.has_mine()) {
            cell.knowledge = KnowledgeState::Known;
        }
        self.retrieve_cell_mutable(point).exploded = true;
        self.status = GameStatus::Lost;
        debug!("mine hit at {}", point);
    }

    pub fn toggle_flag(&mut self, point: &Point) -> Result<FlagChange> {
        self.ensure_playable()?;
        let cell = self.retrieve_cell(point);
        let change = match cell.knowledge {
            KnowledgeState::Known => return Err(BoardError::AlreadyRevealed),
            KnowledgeState::Unknown if self.flags_remaining == 0 => return Err(BoardError::NoFlagsRemaining),
            KnowledgeState::Unknown => FlagChange::Placed,
            KnowledgeState::Flag => FlagChange::Removed
        };
        let on_mine = cell.has_mine();
        self.retrieve_cell_mutable(point).toggle_flag();
        match change {
            FlagChange::Placed => {
                self.flags_remaining -= 1;
                self.correct_flags += on_mine as usize;
            }
            FlagChange::Removed => {
                self.flags_remaining += 1;
                self.correct_flags -= on_mine as usize;
            }
        }
        self.status = GameStatus::InProgress;
        self.settle();
        Ok(change)
    }

    /// Opens a random hidden safe cell that touches at least one mine.
    pub fn hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Point> {
        self.ensure_playable()?;
        let candidates: Vec<Point> = self.cells()
            .filter(|cell| cell.knowledge.is_unknown() && !cell.has_mine() && cell.mined_neighbor_count > 0)
            .map(|cell| cell.point)
            .collect();
        let point = *candidates.choose(rng).ok_or(BoardError::NoHintAvailable)?;
        self.retrieve_cell_mutable(&point).knowledge = KnowledgeState::Known;
        self.safe_remaining -= 1;
        self.status = GameStatus::InProgress;
        self.settle();
        debug!("hinted {}", point);
        Ok(point)
    }

    /// Ends the game as won, regardless of the grid.
    pub fn force_win(&mut self) -> Result<()> {
        self.ensure_playable()?;
        self.status = GameStatus::Won;
        debug!("forced win with {} safe cells left", self.safe_remaining);
        Ok(())
    }

    pub fn reveal_all(&self) -> Exposed<'_> {
        Exposed(self)
    }

    // winning needs every safe cell open *and* every mine flagged
    fn win_condition(&self) -> bool {
        self.safe_remaining == 0 && self.correct_flags == self.mine_count
    }

    fn settle(&mut self) {
        if self.win_condition() {
            self.status = GameStatus::Won;
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, symbol: fn(&Cell) -> Symbol) -> fmt::Result {
        let header = (1..=self.size.cols).map(|c| format!("{:<3}", c)).join("");
        writeln!(f, "   {}", header.trim_end())?;
        for (i, row) in self.field.iter().enumerate() {
            let line = row.iter().map(|cell| format!("{:<3}", symbol(cell).glyph())).join("");
            writeln!(f, "{}  {}", row_label(i), line.trim_end())?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod board_tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn corner_mine() -> Board {
        Board::with_mines(3, 3, &[Point(0, 0)]).unwrap()
    }

    // full bottom row plus A-side of row H on a 9x9
    fn bottom_heavy() -> Board {
        let mut mines: Vec<Point> = (0..9).map(|c| Point(8, c)).collect();
        mines.push(Point(7, 0));
        Board::with_mines(9, 9, &mines).unwrap()
    }

    fn point_fits_on_board(point: &Point, board: &BoardSize) -> bool {
        point.0 < board.rows && point.1 < board.cols
    }

    fn valid_points_for_board(points: &[Point], board: &BoardSize) -> bool {
        if points.iter().any(|point| !point_fits_on_board(point, board)) {
            return false
        }
        points.iter().unique().count() == points.len()
    }

    #[test]
    fn adjacent_counts_are_clipped() {
        let board = corner_mine();
        assert_eq!(board.adjacent_mine_count(&Point(0, 1)), 1);
        assert_eq!(board.adjacent_mine_count(&Point(1, 1)), 1);
        assert_eq!(board.adjacent_mine_count(&Point(2, 2)), 0);
        assert_eq!(board.adjacent_mine_count(&Point(0, 0)), 0);
        assert_eq!(board.neighbor_points(&Point(0, 0)).len(), 3);
        assert_eq!(board.neighbor_points(&Point(1, 1)).len(), 8);
    }

    #[test]
    fn corner_open_cascades() {
        let mut board = bottom_heavy();
        assert_eq!(board.reveal(&Point(0, 0)), Ok(Reveal::Opened(71)));
        assert_eq!(board.safe_remaining(), 0);
        assert_eq!(board.retrieve_cell(&Point(6, 0)).symbol(), Symbol::Count(1));
        assert!(!board.retrieve_cell(&Point(7, 0)).is_revealed());
        // mines still unflagged, so no win yet
        assert_eq!(board.status(), GameStatus::InProgress);
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut board = bottom_heavy();
        board.reveal(&Point(7, 4)).unwrap();
        assert_eq!(board.safe_remaining(), 70);
        assert_eq!(board.reveal(&Point(7, 4)), Ok(Reveal::Opened(0)));
        assert_eq!(board.safe_remaining(), 70);
    }

    #[test]
    fn flood_fill_stops_at_flags() {
        let mut board = corner_mine();
        board.toggle_flag(&Point(2, 0)).unwrap();
        board.reveal(&Point(2, 2)).unwrap();
        assert_eq!(board.retrieve_cell(&Point(2, 0)).symbol(), Symbol::Flagged);
        assert_eq!(board.safe_remaining(), 1);
    }

    #[test]
    fn mine_loses_and_shows_mines() {
        let mut board = bottom_heavy();
        board.toggle_flag(&Point(8, 8)).unwrap();
        assert_eq!(board.reveal(&Point(7, 0)), Ok(Reveal::Exploded));
        assert!(board.is_lost());
        assert_eq!(board.retrieve_cell(&Point(7, 0)).symbol(), Symbol::Exploded);
        assert!(board.mine_points().iter()
            .filter(|p| **p != Point(7, 0))
            .all(|p| board.retrieve_cell(p).symbol() == Symbol::Mine));
        assert_eq!(board.reveal(&Point(0, 0)), Err(BoardError::GameOver));
        assert_eq!(board.toggle_flag(&Point(0, 0)), Err(BoardError::GameOver));
    }

    #[test]
    fn win_needs_reveal_and_flags() {
        let mut board = corner_mine();
        board.reveal(&Point(2, 2)).unwrap();
        assert_eq!(board.safe_remaining(), 0);
        assert_eq!(board.status(), GameStatus::InProgress);
        board.toggle_flag(&Point(0, 0)).unwrap();
        assert!(board.is_won());
    }

    #[test]
    fn flags_alone_do_not_win() {
        let mut board = corner_mine();
        board.toggle_flag(&Point(0, 0)).unwrap();
        assert_eq!(board.correct_flags(), 1);
        assert_eq!(board.status(), GameStatus::InProgress);
    }

    #[test]
    fn flag_toggle_is_reversible() {
        let mut board = bottom_heavy();
        assert_eq!(board.flags_remaining(), 10);
        assert_eq!(board.toggle_flag(&Point(8, 3)), Ok(FlagChange::Placed));
        assert_eq!(board.flags_remaining(), 9);
        assert_eq!(board.correct_flags(), 1);
        assert_eq!(board.toggle_flag(&Point(8, 3)), Ok(FlagChange::Removed));
        assert_eq!(board.flags_remaining(), 10);
        assert_eq!(board.correct_flags(), 0);
        assert_eq!(board.retrieve_cell(&Point(8, 3)).symbol(), Symbol::Hidden);
    }

    #[test]
    fn flag_limits() {
        let mut board = corner_mine();
        board.toggle_flag(&Point(1, 1)).unwrap();
        assert_eq!(board.toggle_flag(&Point(2, 2)), Err(BoardError::NoFlagsRemaining));
        board.reveal(&Point(0, 2)).unwrap();
        assert_eq!(board.toggle_flag(&Point(0, 2)), Err(BoardError::AlreadyRevealed));
        assert_eq!(board.reveal(&Point(1, 1)), Err(BoardError::AlreadyFlagged));
    }

    #[test]
    fn validate_open_reports_state() {
        let mut board = corner_mine();
        board.reveal(&Point(0, 1)).unwrap();
        board.toggle_flag(&Point(1, 0)).unwrap();
        assert_eq!(board.validate_open(&Point(0, 1)), Err(BoardError::AlreadyRevealed));
        assert_eq!(board.validate_open(&Point(1, 0)), Err(BoardError::AlreadyFlagged));
        assert_eq!(board.validate_open(&Point(2, 2)), Ok(()));
    }

    #[test]
    fn locate_checks_bounds() {
        let size = BoardSize{rows: 9, cols: 9};
        assert_eq!(size.locate(0, 1), Ok(Point(0, 0)));
        assert_eq!(size.locate(8, 9), Ok(Point(8, 8)));
        assert_eq!(size.locate(9, 1), Err(BoardError::InvalidRow { last: 'I' }));
        assert_eq!(size.locate(0, 0), Err(BoardError::InvalidColumn { cols: 9 }));
        assert_eq!(size.locate(0, 10), Err(BoardError::InvalidColumn { cols: 9 }));
    }

    #[test]
    fn state_machine() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::new(9, 9);
        assert_eq!(board.status(), GameStatus::Uninitialized);
        assert_eq!(board.reveal(&Point(0, 0)), Err(BoardError::NotSeeded));
        board.place_mines(10, &mut rng).unwrap();
        assert_eq!(board.status(), GameStatus::MinesPlaced);
        assert_eq!(board.place_mines(10, &mut rng), Err(BoardError::AlreadySeeded));
        board.force_win().unwrap();
        assert!(board.is_won());
        assert_eq!(board.force_win(), Err(BoardError::GameOver));
    }

    #[test]
    fn too_many_mines() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Board::seeded(3, 3, 9, &mut rng).err(),
                   Some(BoardError::TooManyMines { mines: 9, cells: 9 }));
        assert!(Board::seeded(3, 3, 8, &mut rng).is_ok());
    }

    #[test]
    fn bad_layouts_are_rejected() {
        assert_eq!(Board::with_mines(3, 3, &[Point(0, 0), Point(0, 0)]).err(), Some(BoardError::InvalidLayout));
        assert_eq!(Board::with_mines(3, 3, &[Point(3, 0)]).err(), Some(BoardError::InvalidLayout));
    }

    #[test]
    fn hint_opens_a_numbered_cell() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut board = corner_mine();
        let point = board.hint(&mut rng).unwrap();
        assert!([Point(0, 1), Point(1, 0), Point(1, 1)].contains(&point));
        assert!(board.retrieve_cell(&point).is_revealed());
        assert_eq!(board.safe_remaining(), 7);
        board.hint(&mut rng).unwrap();
        board.hint(&mut rng).unwrap();
        assert_eq!(board.hint(&mut rng), Err(BoardError::NoHintAvailable));
    }

    #[test]
    fn cheat_view_hides_nothing() {
        let board = corner_mine();
        let exposed = board.reveal_all().to_string();
        assert_eq!(exposed, "   1  2  3\nA  B  1  0\nB  1  1  0\nC  0  0  0\n");
        assert_eq!(board.to_string(), "   1  2  3\nA  ■  ■  ■\nB  ■  ■  ■\nC  ■  ■  ■\n");
        assert_eq!(board.status(), GameStatus::MinesPlaced);
    }

    proptest! {
        #[test]
        fn area_correctness(rows in 0..1000usize, cols in 0..1000usize) {
            prop_assert_eq!(BoardSize{rows, cols}.area(), rows * cols);
        }

        #[test]
        fn point_from_integer_correctness(x in 0..2_000_000usize, rows in 1..1000usize, cols in 1..1000usize) {
            let size = BoardSize{rows, cols};
            match size.point_from_integer(x) {
                None => prop_assert!(x >= rows * cols),
                Some(point) => {
                    prop_assert!(point.0 == x/cols && point.0 < rows);
                    prop_assert!(point.1 == x%cols && point.1 < cols);
                }
            }
        }

        #[test]
        fn test_points(rows in 0..100usize, cols in 0..100usize) {
            let size = BoardSize{rows, cols};
            let points = size.points();
            prop_assert_eq!(points.len(), size.area());
            prop_assert!(valid_points_for_board(&points, &size));
        }

        #[test]
        fn placement_is_exact(seed in any::<u64>(), rows in 1..20usize, cols in 1..20usize, mines in 0..400usize) {
            let mut rng = StdRng::seed_from_u64(seed);
            match Board::seeded(rows, cols, mines, &mut rng) {
                Err(err) => {
                    prop_assert!(mines >= rows * cols);
                    prop_assert_eq!(err, BoardError::TooManyMines { mines, cells: rows * cols });
                }
                Ok(board) => {
                    let placed = board.mine_points();
                    prop_assert_eq!(placed.len(), mines);
                    prop_assert_eq!(board.mine_count(), mines);
                    prop_assert!(valid_points_for_board(&placed, &board.size));
                    prop_assert_eq!(board.flags_remaining(), mines);
                }
            }
        }

        #[test]
        fn flood_fill_invariants(seed in any::<u64>(), row in 0..9usize, col in 0..9usize) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut board = Board::seeded(9, 9, 10, &mut rng).unwrap();
            let point = Point(row, col);
            let before = board.safe_remaining();
            match board.reveal(&point).unwrap() {
                Reveal::Exploded => {
                    prop_assert!(board.is_lost());
                    prop_assert!(board.mine_points().iter().all(|p| board.retrieve_cell(p).is_revealed()));
                }
                Reveal::Opened(n) => {
                    prop_assert!(n >= 1);
                    prop_assert_eq!(before - n, board.safe_remaining());
                    let revealed = board.cells().filter(|cell| cell.is_revealed()).count();
                    prop_assert_eq!(revealed, n);
                    prop_assert!(board.cells().filter(|cell| cell.has_mine()).all(|cell| !cell.is_revealed()));
                    prop_assert_eq!(board.reveal(&point).unwrap(), Reveal::Opened(0));
                    prop_assert_eq!(board.safe_remaining(), before - n);
                }
            }
        }
    }
}
