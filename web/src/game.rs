use crate::input::BoardClick;
use noughts_core as game;
use noughts_core::{Player, Position, SIDE};
use web_sys::Element;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewCellState {
    Empty,
    Marked(Player),
    Winning(Player),
}

impl ViewCellState {
    fn at(game: &game::Game, pos: Position) -> Self {
        match game.cell_at(pos).player() {
            None => Self::Empty,
            Some(player) if Self::on_winning_line(game, pos) => Self::Winning(player),
            Some(player) => Self::Marked(player),
        }
    }

    fn on_winning_line(game: &game::Game, pos: Position) -> bool {
        game.winning_line().is_some_and(|line| line.contains(&pos))
    }

    fn mark(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::Marked(player) | Self::Winning(player) => Some(player),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewGameState {
    InProgress,
    Won,
    Draw,
}

impl ViewGameState {
    fn of(game: &game::Game) -> Self {
        match game.status() {
            game::GameStatus::InProgress => Self::InProgress,
            game::GameStatus::Won(_) => Self::Won,
            game::GameStatus::Draw => Self::Draw,
        }
    }

    const fn class(self) -> &'static str {
        match self {
            Self::InProgress => "in-progress",
            Self::Won => "win",
            Self::Draw => "draw",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    BoardClick(BoardClick),
    Reset,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    pos: Position,
    cell_state: ViewCellState,
    #[prop_or_default]
    locked: bool,
}

/// Cells carry no listeners, clicks are resolved by the board.
#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    use ViewCellState::*;

    let CellProps {
        pos,
        cell_state,
        locked,
    } = props.clone();

    let mut class = classes!(
        "cell",
        match cell_state {
            Empty => classes!(),
            Marked(player) => classes!(player.symbol().to_lowercase()),
            Winning(player) => classes!(player.symbol().to_lowercase(), "win"),
        }
    );
    if locked {
        class.push("locked");
    }

    html! {
        <td {class} data-index={pos.to_string()}>
            {cell_state.mark().map(Player::symbol).unwrap_or_default()}
        </td>
    }
}

#[derive(Debug, Default)]
pub(crate) struct GameView {
    game: game::Game,
    board_ref: NodeRef,
}

impl GameView {
    fn play(&mut self, pos: Position) -> bool {
        match self.game.apply_move(pos) {
            Ok(outcome) => {
                log::debug!("move at {}: {:?}", pos, outcome.status);
                true
            }
            Err(err) => {
                log::debug!("click at {} ignored: {}", pos, err);
                false
            }
        }
    }

    fn handle(&mut self, msg: Msg) -> bool {
        match msg {
            Msg::BoardClick(click) => match click.position() {
                Some(pos) => self.play(pos),
                None => {
                    log::trace!("click outside cells: {:?}", click);
                    false
                }
            },
            Msg::Reset => {
                self.game.reset();
                true
            }
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.handle(msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let game_state = ViewGameState::of(&self.game);
        let status_text = self.game.status_line().to_string();
        let is_playable = matches!(game_state, ViewGameState::InProgress);

        let board_ref = self.board_ref.clone();
        let cb_board = ctx.link().batch_callback(move |e: MouseEvent| {
            let board = board_ref.cast::<Element>()?;
            BoardClick::from_event(&e, &board).map(Msg::BoardClick)
        });
        let cb_reset = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Reset
        });

        html! {
            <div class="noughts">
                <nav>
                    <output class={game_state.class()}>{status_text}</output>
                    <button onclick={cb_reset}>{"Reset"}</button>
                </nav>
                <table
                    ref={self.board_ref.clone()}
                    class={is_playable.then_some("playable")}
                    onclick={cb_board}
                >
                    {
                        for (0..SIDE).map(|row| html! {
                            <tr>
                                {
                                    for (0..SIDE).filter_map(|col| Position::from_row_col(row, col).ok()).map(|pos| {
                                        let cell_state = ViewCellState::at(&self.game, pos);
                                        let locked = !self.game.can_play_at(pos);
                                        html! {
                                            <CellView {pos} {cell_state} {locked}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
            </div>
        }
    }
}
