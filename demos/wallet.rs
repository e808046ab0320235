//! Wallet screen demo.
//!
//! Builds a wallet screen with a scrolling content column and a fixed
//! deposit bar, lays it out for a phone-sized screen and prints the
//! resulting frames.
//!
//! Run with `RUST_LOG=spark_flex=debug cargo run --example wallet` to see
//! attach and layout passes.

use spark_flex::{
    AlignItems, AlignSelf, Direction, EdgeInsets, FlexDirection, FlexLayout, FlexResult,
    JustifyContent, LayoutMode, Percent, Rect, Rgba, Size, View, nodes, register_image, when,
};
use tracing_subscriber::EnvFilter;

/// Hosts have real text measurement; the demo approximates it.
fn label(text: &str, font_size: f32) -> View {
    let view = View::new();
    view.set_intrinsic_size(Size::new(
        (text.chars().count() as f32 * font_size * 0.55).ceil(),
        (font_size * 1.2).ceil(),
    ));
    view
}

fn button(title: &str, font_size: f32) -> View {
    let view = label(title, font_size);
    view.set_background(Rgba::white(0.95, 1.0));
    view
}

/// One tappable row: title, value, arrow and a hairline separator.
fn cell(title: &str, value: &str) -> FlexResult<(View, View)> {
    let title_label = label(title, 14.0);
    let value_label = label(value, 14.0);
    let arrow = View::image_named("rightArrow");

    let cell = FlexLayout::new(
        Direction::Vertical,
        nodes![
            FlexLayout::new(
                Direction::Horizontal,
                nodes![
                    title_label.flex().grow(1.0).shrink(1.0),
                    value_label.flex().margin_horizontal(10.0),
                    arrow.flex().square(15.0).align_self(AlignSelf::Center),
                ],
            )?
            .flex()
            .grow(1.0),
            View::new()
                .flex()
                .background_color(Rgba::white(0.85, 1.0))
                .height(0.5),
        ],
    )?;
    cell.flex().padding_horizontal(15.0).height(55.0);

    Ok((cell.view(), value_label))
}

struct WalletView {
    screen: View,
    root: View,
    main: View,
    balance_label: View,
}

impl WalletView {
    fn new(can_add_more: bool) -> FlexResult<Self> {
        let screen = View::new();
        screen.set_background(Rgba::WHITE);
        let root = View::new();
        screen.add_subview(root)?;

        let scroll = View::new();
        let main = View::new();
        main.set_background(Rgba::white(0.96, 1.0));

        let title = label("My Wallet", 22.0);
        let poster = View::image_named("bike_bg");
        let poster_title = label("Bike Monthly Pass", 18.0);
        let poster_subtitle = label("mmbike", 20.0);

        let card = View::new();
        let card_title = label("Monthly pass", 14.0);
        let remain_days = label("0 days left", 14.0);
        let tips = label("Ride for less!", 12.0);
        let days_button = button("View", 14.0);

        let (balance_view, balance_label) = cell("Balance", "0.00")?;
        let (bonus_view, _) = cell("Red packets", "0.00")?;
        let (wx_view, _) = cell("WeChat autopay", "Off")?;
        let (more_view1, _) = cell("Alipay autopay", "Off")?;
        let (more_view2, _) = cell("UnionPay autopay", "Off")?;

        let lock_icon = View::image_named("bike_lock");
        let deposit_label = label("Deposit paid, member services enabled", 13.0);
        let deposit_button = button("View", 13.0);

        FlexLayout::with_background(
            Direction::Vertical,
            root,
            nodes![
                FlexLayout::with_background(Direction::Vertical, scroll, nodes![main])?
                    .flex()
                    .grow(1.0)
                    .shrink(1.0),
                FlexLayout::new(
                    Direction::Horizontal,
                    nodes![
                        lock_icon
                            .flex()
                            .width(20.0)
                            .margin_horizontal(20.0)
                            .aspect_ratio_of(lock_icon),
                        deposit_label.flex().margin_right(20.0).grow(1.0).shrink(1.0),
                        deposit_button.flex().padding_horizontal(10.0).margin_right(14.0),
                    ],
                )?
                .flex()
                .align_items(AlignItems::Center)
                .height(60.0)
                .background_color(Rgba::white(0.93, 1.0)),
            ],
        )?;

        FlexLayout::with_background(
            Direction::Vertical,
            main,
            nodes![
                title.flex().margin_top(30.0).margin_bottom(18.0),
                FlexLayout::with_background(
                    Direction::Vertical,
                    poster,
                    nodes![
                        FlexLayout::new(Direction::Vertical, nodes![poster_title, poster_subtitle])?
                            .flex()
                            .grow(1.0)
                            .margin_left(20.0)
                            .padding_vertical(20.0)
                            .justify_content(JustifyContent::SpaceBetween),
                    ],
                )?
                .flex()
                .width(100.percent())
                .aspect_ratio(Some(67.0 / 40.0))
                .margin_bottom(15.0),
                FlexLayout::with_background(
                    Direction::Vertical,
                    card,
                    nodes![
                        FlexLayout::new(
                            Direction::Vertical,
                            nodes![card_title, remain_days.flex().margin_top(4.0)],
                        )?,
                        View::new().flex().grow(1.0).shrink(1.0),
                        tips,
                        days_button
                            .flex()
                            .margin_left(14.0)
                            .padding_horizontal(20.0)
                            .height(36.0),
                    ],
                )?
                .flex()
                .direction(FlexDirection::Row)
                .padding_edges(20.0, 20.0, 20.0, 14.0)
                .background_color(Rgba::WHITE),
                balance_view,
                bonus_view,
                wx_view,
                when(can_add_more, || nodes![more_view1, more_view2]),
            ],
        )?
        .flex()
        .padding_horizontal(20.0);

        Ok(Self {
            screen,
            root,
            main,
            balance_label,
        })
    }

    /// Fill `bounds` minus the safe area, then let the content column grow
    /// to its natural height.
    fn layout(&self, bounds: Rect) -> FlexResult<()> {
        self.root.set_frame(bounds);
        self.root.flex().margin_insets(self.screen.safe_area_insets());
        self.root.flex().layout(LayoutMode::FitContainer)?;
        self.main.flex().layout(LayoutMode::AdjustHeight)
    }

    fn size_that_fits(&self, size: Size) -> FlexResult<Size> {
        self.layout(Rect::new(0.0, 0.0, size.width, size.height))?;
        Ok(self.root.frame().size)
    }
}

fn print_tree(view: View, depth: usize) {
    let frame = view.frame();
    println!(
        "{:indent$}#{:<3} x={:<6} y={:<6} w={:<6} h={}",
        "",
        view.index(),
        frame.origin.x,
        frame.origin.y,
        frame.width(),
        frame.height(),
        indent = depth * 2
    );
    for child in view.subviews() {
        print_tree(child, depth + 1);
    }
}

fn main() -> FlexResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    register_image("bike_bg", Size::new(670.0, 400.0));
    register_image("bike_lock", Size::new(18.0, 22.0));
    register_image("rightArrow", Size::new(15.0, 15.0));

    let wallet = WalletView::new(true)?;
    wallet
        .screen
        .set_safe_area_insets(EdgeInsets::new(44.0, 0.0, 34.0, 0.0));

    let bounds = Rect::new(0.0, 0.0, 375.0, 812.0);
    wallet.screen.set_frame(bounds);
    wallet.layout(bounds)?;

    print_tree(wallet.screen, 0);
    println!("content height: {}", wallet.main.frame().height());
    println!("balance value frame: {:?}", wallet.balance_label.frame());

    let fitted = wallet.size_that_fits(Size::new(320.0, 568.0))?;
    println!("fits 320x568 as {}x{}", fitted.width, fitted.height);

    Ok(())
}
