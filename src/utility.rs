use crate::error::{OrderingError,Result};
use crate::graph::EliminationGraph;
use crate::sparse::SparseView;

///True if `p` holds every index in `0..n` exactly once.
pub fn is_permutation(p : &[usize],n : usize) -> bool{
    if p.len() != n{
        return false;
    }
    let mut seen = vec![false;n];
    for &i in p.iter(){
        if i>=n || seen[i]{
            return false;
        }
        seen[i]=true;
    }
    true
}

///`q` with `q[p[k]] == k`, which maps a solution in the permuted
///numbering back to the original one.
pub fn inverse_permutation(p : &[usize]) -> Vec<usize>{
    let mut q = vec![0 as usize;p.len()];
    for (k,&pk) in p.iter().enumerate(){
        q[pk]=k;
    }
    q
}

///Fill-in produced by eliminating the nodes of `g` in the order `p`.
///Consumes the graph's active nodes. The graph must not have had any
///node eliminated yet; it is left untouched when an error is returned.
pub fn graph_fill_in(g : &mut EliminationGraph,p : &[usize]) -> Result<usize>{
    if g.nactive() != g.nnodes(){
        return Err(OrderingError::invalid_argument("graph",
            format!("{} of {} nodes already eliminated",g.nnodes()-g.nactive(),g.nnodes())));
    }
    if !is_permutation(p,g.nnodes()){
        return Err(OrderingError::invalid_argument("permutation",
            format!("not a permutation of 0..{}",g.nnodes())));
    }
    Ok(p.iter().map(|&n| g.marginalize(n)).sum())
}

///Number of new nonzeros a symmetric factorization of `mat` would
///pick up when its variables are eliminated in the order `p`.
pub fn fill_in<M : SparseView>(mat : &M,p : &[usize]) -> Result<usize>{
    let mut g = EliminationGraph::new(mat)?;
    graph_fill_in(&mut g,p)
}
