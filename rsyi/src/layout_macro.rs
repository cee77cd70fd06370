/// Create a layer in keymap
#[macro_export]
macro_rules! layer {
    ([$([$($x: expr), +]), +]) => {
        [$([$($x), +]),+]
    };
}

/// Create a normal key. For example, `k!(A)` represents `KeyAction::Single(Action::Key(KeyCode::A))`.
///
/// Digits can be written as literals, `k!(1)` is `KeyCode::Kc1`.
#[macro_export]
macro_rules! k {
    ($k: ident) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::Key(
            $crate::types::keycode::KeyCode::$k,
        ))
    };
    ($k: literal) => {
        $crate::paste! {
            $crate::types::action::KeyAction::Single($crate::types::action::Action::Key(
                $crate::types::keycode::KeyCode::[<Kc $k>],
            ))
        }
    };
}

/// Create a shifted key, `s!(Grave)` types `~` and `s!(1)` types `!`
#[macro_export]
macro_rules! s {
    ($k: ident) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::KeyWithModifier(
            $crate::types::keycode::KeyCode::$k,
            $crate::types::modifier::SHIFT,
        ))
    };
    ($k: literal) => {
        $crate::paste! {
            $crate::types::action::KeyAction::Single($crate::types::action::Action::KeyWithModifier(
                $crate::types::keycode::KeyCode::[<Kc $k>],
                $crate::types::modifier::SHIFT,
            ))
        }
    };
}

/// Software Dvorak key, `dv!(QUOTE)` is the key typing `'` on a Dvorak host
#[macro_export]
macro_rules! dv {
    ($k: ident) => {
        $crate::types::dvorak::$k
    };
}

/// Create a normal action: `KeyAction`
#[macro_export]
macro_rules! a {
    ($a: ident) => {
        $crate::types::action::KeyAction::$a
    };
}

/// Create a layer activate action. For example, `mo!(1)` activates layer 1.
#[macro_export]
macro_rules! mo {
    ($x: expr) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::LayerOn($x as u8))
    };
}

/// Create a custom keycode action, `custom!(Backlit)` sends [`CustomKeycode::Backlit`](crate::layout::CustomKeycode)
#[macro_export]
macro_rules! custom {
    ($x: ident) => {
        $crate::layout::CustomKeycode::$x.action()
    };
}
