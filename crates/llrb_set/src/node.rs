pub(crate) type Link<T> = Option<Box<Node<T>>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) color: Color,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, color: Color) -> Self {
        Self {
            value,
            color,
            left: None,
            right: None,
        }
    }

    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}

/// Absent children are black leaves.
pub(crate) fn is_red<T>(link: &Link<T>) -> bool {
    link.as_ref().is_some_and(|n| n.is_red())
}

/// Promotes the right child into `h`'s position.
///
/// The promoted node takes `h`'s color and `h` becomes red. Returns `h`
/// unchanged when there is no right child.
pub(crate) fn rotate_left<T>(mut h: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut x) = h.right.take() else {
        return h;
    };
    h.right = x.left.take();
    x.color = h.color;
    h.color = Color::Red;
    x.left = Some(h);
    log::trace!("llrb: rotate left");
    x
}

/// Mirror image of [`rotate_left`].
pub(crate) fn rotate_right<T>(mut h: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut x) = h.left.take() else {
        return h;
    };
    h.left = x.right.take();
    x.color = h.color;
    h.color = Color::Red;
    x.right = Some(h);
    log::trace!("llrb: rotate right");
    x
}

/// Splits a temporary 4-node: `h` turns red and both children turn black.
pub(crate) fn flip_colors<T>(h: &mut Node<T>) {
    h.color = Color::Red;
    if let Some(left) = h.left.as_deref_mut() {
        left.color = Color::Black;
    }
    if let Some(right) = h.right.as_deref_mut() {
        right.color = Color::Black;
    }
    log::trace!("llrb: flip colors");
}

/// Restores the left-leaning shape at `h`.
///
/// Rules are tried in priority order and evaluation restarts from the first
/// rule every time one fires, until none applies.
pub(crate) fn rebalance<T>(mut h: Box<Node<T>>) -> Box<Node<T>> {
    loop {
        if is_red(&h.right) && !is_red(&h.left) {
            h = rotate_left(h);
        } else if is_red(&h.left) && h.left.as_ref().is_some_and(|l| is_red(&l.left)) {
            h = rotate_right(h);
        } else if is_red(&h.left) && is_red(&h.right) {
            flip_colors(&mut h);
        } else {
            return h;
        }
    }
}
