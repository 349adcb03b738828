use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::iter;
use std::rc::Rc;

use tracing::{debug, info};

use reachability::{ReachabilityGraph, Traversable};

use crate::ability::Ability;
use crate::errors::{AbilityError, Result};

/// A tree of abilities together with the score used to pay for them.
#[derive(Debug)]
pub struct AbilityBook<I>
where
    I: Debug + Display + Clone + Eq + Hash,
{
    graph: ReachabilityGraph<Ability<I>>,
    order: Vec<I>,
    score: u64,
}

impl<I> AbilityBook<I>
where
    I: Debug + Display + Clone + Eq + Hash,
{
    /// Start a book from its base ability, which is always learned and free.
    pub fn new(base: Ability<I>) -> Self {
        let base = Rc::new(base.with_price(0).learned());
        let order = vec![base.id().clone()];

        Self {
            graph: ReachabilityGraph::new(base),
            order,
            score: 0,
        }
    }

    /// Add an ability to the book. It is not linked to anything yet.
    pub fn insert(&mut self, ability: Ability<I>) -> Result<Rc<Ability<I>>> {
        if self.graph.contains(ability.id()) {
            return Err(AbilityError::Duplicate(ability.id().to_string()));
        }

        let ability = Rc::new(ability);
        self.order.push(ability.id().clone());
        self.graph.add_vertices(iter::once(ability.clone()));
        Ok(ability)
    }

    /// Link `id` with each of `others`. Links are undirected.
    pub fn link(&mut self, id: &I, others: &[I]) -> Result<()> {
        let target = self.get(id)?;
        let sources = others
            .iter()
            .map(|other| self.get(other))
            .collect::<Result<Vec<_>>>()?;

        self.graph
            .try_add_edges(&*target, sources.iter().map(|s| &**s))?;
        Ok(())
    }

    fn get(&self, id: &I) -> Result<Rc<Ability<I>>> {
        self.graph
            .vertex(id)
            .cloned()
            .ok_or_else(|| AbilityError::Unknown(id.to_string()))
    }

    pub fn ability(&self, id: &I) -> Option<&Rc<Ability<I>>> {
        self.graph.vertex(id)
    }

    pub fn base(&self) -> &Rc<Ability<I>> {
        self.graph.root()
    }

    /// All abilities, base first, then in insertion order.
    pub fn abilities(&self) -> impl Iterator<Item = &Rc<Ability<I>>> {
        let graph = &self.graph;
        self.order.iter().filter_map(move |id| graph.vertex(id))
    }

    /// Learned abilities, in the same order as [AbilityBook::abilities].
    pub fn learned(&self) -> Vec<Rc<Ability<I>>> {
        self.abilities()
            .filter(|a| a.is_learned())
            .cloned()
            .collect()
    }

    /// Ids linked to `id`, in the order the links were made.
    pub fn links(&self, id: &I) -> Option<&[I]> {
        self.graph.neighbors(id)
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn earn(&mut self, amount: u64) {
        self.score = self.score.saturating_add(amount);
        debug!(amount, score = self.score, "earned");
    }

    fn check_learn(&self, id: &I) -> Result<Rc<Ability<I>>> {
        let ability = self.get(id)?;

        if ability.is_learned() {
            return Err(AbilityError::AlreadyLearned(id.to_string()));
        }

        if ability.price() > self.score {
            return Err(AbilityError::InsufficientScore {
                id: id.to_string(),
                price: ability.price(),
                score: self.score,
            });
        }

        if !self.graph.has_path(self.base(), &ability) {
            return Err(AbilityError::Unreachable(id.to_string()));
        }

        Ok(ability)
    }

    pub fn can_learn(&self, id: &I) -> bool {
        self.check_learn(id).is_ok()
    }

    /// Pay for and learn an ability.
    pub fn learn(&mut self, id: &I) -> Result<()> {
        let ability = self.check_learn(id)?;

        self.score -= ability.price();
        ability.set_learned(true);
        info!(id = %id, price = ability.price(), score = self.score, "learned");
        Ok(())
    }

    fn check_forget(&self, id: &I) -> Result<Rc<Ability<I>>> {
        let ability = self.get(id)?;

        if !ability.is_learned() {
            return Err(AbilityError::NotLearned(id.to_string()));
        }

        if ability.id() == self.base().id() {
            return Err(AbilityError::Base(id.to_string()));
        }

        if !self.graph.can_make_untraversable(&ability) {
            return Err(AbilityError::WouldDisconnect(id.to_string()));
        }

        Ok(ability)
    }

    pub fn can_forget(&self, id: &I) -> bool {
        self.check_forget(id).is_ok()
    }

    /// Forget an ability and get its price back.
    pub fn forget(&mut self, id: &I) -> Result<()> {
        let ability = self.check_forget(id)?;

        ability.set_learned(false);
        self.score = self.score.saturating_add(ability.price());
        info!(id = %id, refund = ability.price(), score = self.score, "forgot");
        Ok(())
    }

    /// Forget every learned ability connected to the base, refunding their
    /// prices. Returns the total refund.
    pub fn forget_all(&mut self) -> u64 {
        let refund: u64 = self
            .graph
            .traversable_nodes()
            .iter()
            .map(|ability| {
                ability.set_learned(false);
                ability.price()
            })
            .sum();

        self.score = self.score.saturating_add(refund);
        info!(refund, score = self.score, "forgot everything");
        refund
    }
}
