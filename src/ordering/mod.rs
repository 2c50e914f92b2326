//!Fill-reducing elimination orderings.
//!
//!Every strategy turns the sparsity pattern of a matrix into a
//!permutation `p`, where `p[k]` is the original variable eliminated
//!k-th. Numeric values are never looked at beyond "zero or not", so
//!an ordering only needs recomputing when the pattern changes.
//!
//!- `ExactMinimumDegree`: lowest current degree first. The default.
//!- `GreedyMinimumFillin`: fewest new edges first, with cached costs.
//!- `ApproximateFillin`: column zero-count estimate (experimental).
//!- `GreedyRow`: row ordering from column zero counts, any shape.
//!- `KHopDegree`: hop-histogram ranking (experimental).

pub mod minimum_degree;
pub mod minimum_fillin;
pub mod approximate_fillin;
pub mod greedy_row;
pub mod khop;

pub use minimum_degree::ExactMinimumDegree;
pub use minimum_fillin::GreedyMinimumFillin;
pub use approximate_fillin::ApproximateFillin;
pub use greedy_row::GreedyRow;
pub use khop::KHopDegree;

use crate::error::Result;
use crate::sparse::{SparseView,row_pattern};

///Something that can order the variables of a matrix.
pub trait PermutationStrategy{
    ///A fresh permutation of the matrix's rows; deterministic for a
    ///given pattern. Fails before doing any work if the input is unusable.
    fn get_permutation<M : SparseView>(&self,mat : &M) -> Result<Vec<usize>>;
}

///Which strategy to run, chosen at call time.
#[derive(Clone,Copy,Debug,PartialEq)]
pub enum OrderingMethod{
    ExactMinimumDegree,
    GreedyMinimumFillin,
    ApproximateFillin,
    GreedyRow,
    KHopDegree(KHopDegree)
}

impl Default for OrderingMethod{
    fn default() -> Self{ OrderingMethod::ExactMinimumDegree }
}

impl OrderingMethod{
    pub fn name(&self) -> &'static str{
        match self{
            OrderingMethod::ExactMinimumDegree => "exact_minimum_degree",
            OrderingMethod::GreedyMinimumFillin => "greedy_minimum_fillin",
            OrderingMethod::ApproximateFillin => "approximate_fillin",
            OrderingMethod::GreedyRow => "greedy_row",
            OrderingMethod::KHopDegree(_) => "khop_degree"
        }
    }

    ///True for the strategies kept around for comparison only.
    pub fn is_experimental(&self) -> bool{
        match self{
            OrderingMethod::ApproximateFillin | OrderingMethod::KHopDegree(_) => true,
            _ => false
        }
    }
}

impl PermutationStrategy for OrderingMethod{
    fn get_permutation<M : SparseView>(&self,mat : &M) -> Result<Vec<usize>>{
        if self.is_experimental(){
            log::debug!("{} is experimental, output quality is not guaranteed",self.name());
        }
        match self{
            OrderingMethod::ExactMinimumDegree => ExactMinimumDegree.get_permutation(mat),
            OrderingMethod::GreedyMinimumFillin => GreedyMinimumFillin.get_permutation(mat),
            OrderingMethod::ApproximateFillin => ApproximateFillin.get_permutation(mat),
            OrderingMethod::GreedyRow => GreedyRow.get_permutation(mat),
            OrderingMethod::KHopDegree(k) => k.get_permutation(mat)
        }
    }
}

///Row patterns and per-column zero counts of the original matrix,
///shared by the two zero-count heuristics.
pub(crate) struct PatternCounts{
    rows : Vec<Vec<usize>>,
    zeros : Vec<usize>,
    used : Vec<bool>
}

impl PatternCounts{
    pub(crate) fn new<M : SparseView>(mat : &M) -> Self{
        let nrows=mat.get_nrows();
        let rows : Vec<Vec<usize>> = (0..nrows).map(|i|row_pattern(mat,i)).collect();
        let mut zeros = vec![nrows;mat.get_ncols()];
        for r in rows.iter(){
            for &c in r.iter(){
                zeros[c]-=1;
            }
        }
        PatternCounts { rows : rows, zeros : zeros, used : vec![false;nrows] }
    }

    ///Unused row with the smallest zero-count sum over its nonzero
    ///columns, first one on ties. `None` once every row is used.
    pub(crate) fn cheapest_unused(&self) -> Option<(usize,usize)>{
        let mut best : Option<(usize,usize)> = None;
        for (k,r) in self.rows.iter().enumerate(){
            if self.used[k]{
                continue;
            }
            let s : usize = r.iter().map(|&c|self.zeros[c]).sum();
            if best.map_or(true,|(_,bs)| s<bs){
                best=Some((k,s));
            }
        }
        best
    }

    ///Marks row `k` used and rewrites the zero count of every column it touches.
    pub(crate) fn take<U : Fn(usize) -> usize>(&mut self,k : usize,update : U){
        self.used[k]=true;
        for &c in self.rows[k].iter(){
            self.zeros[c]=update(self.zeros[c]);
        }
    }
}
