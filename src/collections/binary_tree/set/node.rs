pub(crate) struct Branch<T>(pub Option<Box<Node<T>>>);

pub(crate) struct Node<T> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub value: T,
}

impl<T> Node<T> {
    pub fn leaf(value: T) -> Box<Node<T>> {
        Box::new(Node {
            left: Branch(None),
            right: Branch(None),
            value,
        })
    }
}

impl<T> Branch<T> {
    pub fn node(&self) -> Option<&Node<T>> {
        self.0.as_deref()
    }
}

impl<T> Default for Branch<T> {
    fn default() -> Self {
        Branch(None)
    }
}
