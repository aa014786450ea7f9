//! 规约模式（Specification）
//!
//! 用于封装业务规则，使其可复用、可组合和可测试。叶子规约可能依赖当前
//! 领域状态（例如查询组织层级），因此求值为异步；组合子持有一到两个子规约，
//! 构成不可变的表达式树，节点一经构造其逻辑含义不再变化。
//!
//! 求值严格自左向右、顺序进行（await 左侧结果后再求值右侧），
//! `and`/`or` 按布尔语义短路。组合子不引入新的错误条件：
//! 叶子规约必须把基础设施错误与结构性非法的候选对象折算为 `false`，
//! 而不是抛出——抛出的叶子会破坏建立在其上的所有组合。

use async_trait::async_trait;

/// 规约模式的核心 trait
#[async_trait]
pub trait Specification<T>: Send + Sync
where
    T: Send + Sync,
{
    /// 检查候选对象是否满足规约（不得修改候选对象）
    async fn is_satisfied_by(&self, candidate: &T) -> bool;

    /// 与另一个规约进行 AND 组合
    fn and<S>(self, other: S) -> AndSpecification<T>
    where
        Self: Sized + 'static,
        S: Specification<T> + 'static,
    {
        AndSpecification::new(Box::new(self), Box::new(other))
    }

    /// 与另一个规约进行 OR 组合
    fn or<S>(self, other: S) -> OrSpecification<T>
    where
        Self: Sized + 'static,
        S: Specification<T> + 'static,
    {
        OrSpecification::new(Box::new(self), Box::new(other))
    }

    /// 对规约进行 NOT 操作
    fn not(self) -> NotSpecification<T>
    where
        Self: Sized + 'static,
    {
        NotSpecification::new(Box::new(self))
    }

    /// AND NOT 组合：`self AND (NOT other)`
    fn and_not<S>(self, other: S) -> AndNotSpecification<T>
    where
        Self: Sized + 'static,
        S: Specification<T> + 'static,
    {
        AndNotSpecification::new(Box::new(self), Box::new(other))
    }

    /// OR NOT 组合：`self OR (NOT other)`
    fn or_not<S>(self, other: S) -> OrNotSpecification<T>
    where
        Self: Sized + 'static,
        S: Specification<T> + 'static,
    {
        OrNotSpecification::new(Box::new(self), Box::new(other))
    }
}

/// 为 Box<dyn Specification<T>> 实现 Specification trait
/// 使得可以直接使用 Box 类型的规约
#[async_trait]
impl<T> Specification<T> for Box<dyn Specification<T>>
where
    T: Send + Sync,
{
    async fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.as_ref().is_satisfied_by(candidate).await
    }
}

/// AND 组合规约
///
/// 当两个规约都满足时，组合规约才满足
pub struct AndSpecification<T> {
    left: Box<dyn Specification<T>>,
    right: Box<dyn Specification<T>>,
}

impl<T> AndSpecification<T> {
    pub fn new(left: Box<dyn Specification<T>>, right: Box<dyn Specification<T>>) -> Self {
        Self { left, right }
    }
}

#[async_trait]
impl<T> Specification<T> for AndSpecification<T>
where
    T: Send + Sync,
{
    async fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.left.is_satisfied_by(candidate).await && self.right.is_satisfied_by(candidate).await
    }
}

/// OR 组合规约
///
/// 当任意一个规约满足时，组合规约就满足
pub struct OrSpecification<T> {
    left: Box<dyn Specification<T>>,
    right: Box<dyn Specification<T>>,
}

impl<T> OrSpecification<T> {
    pub fn new(left: Box<dyn Specification<T>>, right: Box<dyn Specification<T>>) -> Self {
        Self { left, right }
    }
}

#[async_trait]
impl<T> Specification<T> for OrSpecification<T>
where
    T: Send + Sync,
{
    async fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.left.is_satisfied_by(candidate).await || self.right.is_satisfied_by(candidate).await
    }
}

/// NOT 规约
///
/// 当内部规约不满足时，NOT 规约才满足
pub struct NotSpecification<T> {
    inner: Box<dyn Specification<T>>,
}

impl<T> NotSpecification<T> {
    pub fn new(inner: Box<dyn Specification<T>>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<T> Specification<T> for NotSpecification<T>
where
    T: Send + Sync,
{
    async fn is_satisfied_by(&self, candidate: &T) -> bool {
        !self.inner.is_satisfied_by(candidate).await
    }
}

/// AND NOT 组合规约
///
/// 左侧满足且右侧不满足时，组合规约才满足
pub struct AndNotSpecification<T> {
    left: Box<dyn Specification<T>>,
    right: Box<dyn Specification<T>>,
}

impl<T> AndNotSpecification<T> {
    pub fn new(left: Box<dyn Specification<T>>, right: Box<dyn Specification<T>>) -> Self {
        Self { left, right }
    }
}

#[async_trait]
impl<T> Specification<T> for AndNotSpecification<T>
where
    T: Send + Sync,
{
    async fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.left.is_satisfied_by(candidate).await && !self.right.is_satisfied_by(candidate).await
    }
}

/// OR NOT 组合规约
///
/// 左侧满足或右侧不满足时，组合规约就满足
pub struct OrNotSpecification<T> {
    left: Box<dyn Specification<T>>,
    right: Box<dyn Specification<T>>,
}

impl<T> OrNotSpecification<T> {
    pub fn new(left: Box<dyn Specification<T>>, right: Box<dyn Specification<T>>) -> Self {
        Self { left, right }
    }
}

#[async_trait]
impl<T> Specification<T> for OrNotSpecification<T>
where
    T: Send + Sync,
{
    async fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.left.is_satisfied_by(candidate).await || !self.right.is_satisfied_by(candidate).await
    }
}
