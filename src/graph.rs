use crate::error::{require_square,Result};
use crate::sparse::{SparseView,row_pattern};

///Membership flags that never need clearing.
///
///Every merge claims a fresh generation and stamps it into the
///flags of the nodes it touches, so "is marked" means
///`flags[i] == generation`. Stamps from older generations are just
///ignored. When the counter runs out every flag goes back to zero
///and counting restarts at 1; without that reset an old stamp could
///collide with a reused generation.
pub struct Marker{
    flags : Vec<u32>,
    generation : u32
}

impl Marker{
    pub fn new(n : usize) -> Self{
        Marker { flags : vec![0;n], generation : 0 }
    }

    #[cfg(test)]
    pub(crate) fn with_generation(n : usize,generation : u32) -> Self{
        Marker { flags : vec![0;n], generation : generation }
    }

    ///Starts a new generation. Nothing is marked afterwards.
    pub fn next_generation(&mut self) -> u32{
        if self.generation == u32::MAX{
            log::warn!("marker generation counter exhausted, resetting {} flags",self.flags.len());
            for f in self.flags.iter_mut(){
                *f=0;
            }
            self.generation=0;
        }
        self.generation+=1;
        self.generation
    }

    pub fn mark(&mut self,i : usize){
        self.flags[i]=self.generation;
    }

    pub fn is_marked(&self,i : usize) -> bool{
        self.flags[i]==self.generation
    }

    ///Drops repeated entries from `list`, keeping first occurrences in order.
    pub fn dedup(&mut self,list : &mut Vec<usize>){
        self.next_generation();
        let mut keep=0;
        for k in 0..list.len(){
            let v=list[k];
            if !self.is_marked(v){
                self.mark(v);
                list[keep]=v;
                keep+=1;
            }
        }
        list.truncate(keep);
    }
}


///Symmetric adjacency of a square sparsity pattern, with support for
///eliminating nodes one at a time.
///
///Nodes live in flat arrays addressed by their matrix index. Eliminating
///a node hands its neighbor list to its neighbors and empties it, so
///active nodes only ever point at active nodes.
pub struct EliminationGraph{
    nbrs : Vec<Vec<usize>>,
    eliminated : Vec<bool>,
    nactive : usize,
    marker : Marker
}

impl EliminationGraph{
    pub fn panic_if_invalid(&self) -> (){
        assert_eq!(self.nbrs.len(),self.eliminated.len());
        assert_eq!(self.eliminated.iter().filter(|&&e|!e).count(),self.nactive);
        for (i,ns) in self.nbrs.iter().enumerate(){
            if self.eliminated[i]{
                assert!(ns.is_empty());
                continue;
            }
            for (k,&j) in ns.iter().enumerate(){
                //No self loops, no edges into eliminated nodes
                assert!(j != i);
                assert!(!self.eliminated[j]);
                //No duplicates
                assert!(!ns[k+1..].contains(&j));
                //Structurally symmetric
                assert!(self.nbrs[j].contains(&i));
            }
        }
    }

    ///Graph of `n` nodes from an undirected edge list.
    ///Self loops are dropped and repeated edges merged.
    pub fn from_edges(n : usize,edges : &[(usize,usize)]) -> Self{
        let mut nbrs : Vec<Vec<usize>> = vec![Vec::new();n];
        for &(i,j) in edges.iter(){
            assert!(i<n && j<n);
            if i != j{
                nbrs[i].push(j);
                nbrs[j].push(i);
            }
        }
        EliminationGraph::from_lists(nbrs)
    }

    ///Graph of the symmetrised pattern of a square matrix:
    ///{i,j} is an edge if either (i,j) or (j,i) is nonzero.
    pub fn new<M : SparseView>(mat : &M) -> Result<Self>{
        require_square(mat.get_nrows(),mat.get_ncols())?;
        let n=mat.get_nrows();
        let mut nbrs : Vec<Vec<usize>> = vec![Vec::new();n];
        for i in 0..n{
            for j in row_pattern(mat,i){
                if j != i{
                    nbrs[i].push(j);
                    nbrs[j].push(i);
                }
            }
        }
        Ok(EliminationGraph::from_lists(nbrs))
    }

    fn from_lists(mut nbrs : Vec<Vec<usize>>) -> Self{
        let n=nbrs.len();
        let mut marker=Marker::new(n);
        for ns in nbrs.iter_mut(){
            marker.dedup(ns);
        }
        let g = EliminationGraph { nbrs : nbrs, eliminated : vec![false;n], nactive : n, marker : marker };
        g.panic_if_invalid();
        g
    }

    #[cfg(test)]
    pub(crate) fn with_marker_generation(mut self,generation : u32) -> Self{
        self.marker.generation=generation;
        self
    }

    pub fn nnodes(&self) -> usize{ self.nbrs.len() }
    pub fn nactive(&self) -> usize{ self.nactive }
    pub fn degree(&self,i : usize) -> usize{ self.nbrs[i].len() }
    pub fn neighbors(&self,i : usize) -> &[usize]{ &self.nbrs[i] }
    pub fn is_eliminated(&self,i : usize) -> bool{ self.eliminated[i] }

    ///Eliminates `n`: every pair of its neighbors becomes connected
    ///and `n` leaves the graph. Returns the number of new (undirected)
    ///edges this created.
    pub fn marginalize(&mut self,n : usize) -> usize{
        assert!(!self.eliminated[n]);
        let ns=std::mem::take(&mut self.nbrs[n]);
        let mut added=0;
        for &m in ns.iter(){
            //Flag what `m` already touches, then merge in the rest of `n`'s neighborhood
            self.marker.next_generation();
            let mnbrs=&mut self.nbrs[m];
            mnbrs.retain(|&x| x != n);
            for &x in mnbrs.iter(){
                self.marker.mark(x);
            }
            for &x in ns.iter(){
                if x != m && !self.marker.is_marked(x){
                    self.marker.mark(x);
                    mnbrs.push(x);
                    added+=1;
                }
            }
        }
        self.eliminated[n]=true;
        self.nactive-=1;
        //Each new edge was appended from both of its ends
        added/2
    }

    ///How many new edges `marginalize(n)` would create right now:
    ///the unordered pairs of neighbors of `n` that are not yet adjacent.
    ///Adjacency is left alone; only scratch marks are written.
    pub fn marginalize_dry_run(&mut self,n : usize) -> usize{
        assert!(!self.eliminated[n]);
        let ns=&self.nbrs[n];
        let marker=&mut self.marker;
        let mut missing=0;
        for (k,&a) in ns.iter().enumerate(){
            marker.next_generation();
            for &x in self.nbrs[a].iter(){
                marker.mark(x);
            }
            for &b in ns[k+1..].iter(){
                if !marker.is_marked(b){
                    missing+=1;
                }
            }
        }
        missing
    }
}


#[cfg(test)]
mod tests {
    use crate::graph::{EliminationGraph,Marker};
    use crate::gallery::{laplace2d,from_edges};
    use crate::sparse::{CSCSparse,DenseMatrix};
    use crate::error::OrderingError;
    use std::collections::BTreeSet;

    fn nbr_set(g : &EliminationGraph,i : usize) -> BTreeSet<usize>{
        g.neighbors(i).iter().cloned().collect()
    }

    fn set(xs : &[usize]) -> BTreeSet<usize>{
        xs.iter().cloned().collect()
    }

    #[test]
    fn marker_dedup_keeps_first(){
        let mut marker=Marker::new(10);
        let mut list=vec![3,1,3,7,1,1,9,7];
        marker.dedup(&mut list);
        assert_eq!(list,vec![3,1,7,9]);
    }

    #[test]
    fn marker_stale_generations_ignored(){
        let mut marker=Marker::new(4);
        marker.next_generation();
        marker.mark(2);
        assert!(marker.is_marked(2));
        marker.next_generation();
        assert!(!marker.is_marked(2));
    }

    #[test]
    fn marker_wraparound_resets_flags(){
        let mut marker=Marker::with_generation(4,0);
        assert_eq!(marker.next_generation(),1);
        marker.mark(3);
        //Jump to the end of the counter range
        marker.generation=u32::MAX-1;
        assert_eq!(marker.next_generation(),u32::MAX);
        marker.mark(0);
        //Wraps back to generation 1. Node 3 still carries a stamp
        //of 1 from long ago and must not look marked.
        assert_eq!(marker.next_generation(),1);
        assert!(!marker.is_marked(3));
        assert!(!marker.is_marked(0));
        marker.mark(1);
        assert!(marker.is_marked(1));
    }

    #[test]
    fn graph_symmetrises_pattern(){
        //Only the upper triangle is stored
        let a = CSCSparse::from_triplets(4,4,&[(0,0,1.0),(0,1,1.0),(1,3,2.0),(2,2,1.0),(0,1,1.0)]);
        let g = EliminationGraph::new(&a).unwrap();
        assert_eq!(nbr_set(&g,0),set(&[1]));
        assert_eq!(nbr_set(&g,1),set(&[0,3]));
        assert!(nbr_set(&g,2).is_empty());
        assert_eq!(nbr_set(&g,3),set(&[1]));
    }

    #[test]
    fn graph_dense_path_matches_fast_path(){
        let a = laplace2d::<f64>(5,4);
        let d = a.to_dense();
        let g1 = EliminationGraph::new(&a).unwrap();
        let g2 = EliminationGraph::new(&d).unwrap();
        for i in 0..g1.nnodes(){
            assert_eq!(nbr_set(&g1,i),nbr_set(&g2,i));
        }
        assert_eq!(g1.degree(0),2);
        assert_eq!(g1.degree(6),4);
    }

    #[test]
    fn graph_non_square_rejected(){
        let d = DenseMatrix::<f64>::zeros(3,4);
        match EliminationGraph::new(&d){
            Err(OrderingError::InvalidArgument{..}) => {},
            _ => panic!("expected InvalidArgument")
        }
    }

    #[test]
    fn graph_marginalize_connects_neighbors(){
        //Star with centre 0
        let mut g = EliminationGraph::from_edges(5,&[(0,1),(0,2),(0,3),(0,4)]);
        assert_eq!(g.marginalize_dry_run(0),6);
        let added=g.marginalize(0);
        assert_eq!(added,6);
        assert!(g.is_eliminated(0));
        assert_eq!(g.nactive(),4);
        assert_eq!(nbr_set(&g,1),set(&[2,3,4]));
        assert_eq!(nbr_set(&g,4),set(&[1,2,3]));
        g.panic_if_invalid();
    }

    #[test]
    fn graph_marginalize_leaf_adds_nothing(){
        let mut g = EliminationGraph::from_edges(3,&[(0,1),(1,2)]);
        assert_eq!(g.marginalize_dry_run(0),0);
        assert_eq!(g.marginalize(0),0);
        assert_eq!(nbr_set(&g,1),set(&[2]));
        g.panic_if_invalid();
    }

    #[test]
    fn graph_dry_run_matches_marginalize(){
        let a = laplace2d::<f64>(6,6);
        let mut g = EliminationGraph::new(&a).unwrap();
        //Eliminate in an awkward order and compare at every step
        let order : Vec<usize> = (0..36).map(|i| (i*7) % 36).collect();
        for &n in order.iter(){
            let predicted=g.marginalize_dry_run(n);
            let before : Vec<BTreeSet<usize>> = (0..36).map(|i|nbr_set(&g,i)).collect();
            let added=g.marginalize(n);
            assert_eq!(predicted,added);
            //Untouched nodes keep their neighborhoods
            for i in 0..36{
                if i != n && !before[n].contains(&i){
                    assert_eq!(before[i],nbr_set(&g,i));
                }
            }
            g.panic_if_invalid();
        }
        assert_eq!(g.nactive(),0);
    }

    #[test]
    fn graph_dry_run_matches_marginalize_across_wraparound(){
        let a = laplace2d::<f64>(5,5);
        let reference : Vec<usize> = {
            let mut g = EliminationGraph::new(&a).unwrap();
            (0..25).map(|i| g.marginalize((i*3) % 25)).collect()
        };
        //Near the end of the counter the stamps left by earlier
        //merges must not be mistaken for fresh ones after the reset
        let mut g = EliminationGraph::new(&a).unwrap().with_marker_generation(u32::MAX-3);
        for i in 0..25{
            let n=(i*3) % 25;
            let predicted=g.marginalize_dry_run(n);
            let added=g.marginalize(n);
            assert_eq!(predicted,added);
            assert_eq!(added,reference[i]);
            g.panic_if_invalid();
        }
        assert!(g.marker.generation < u32::MAX-3);
        assert_eq!(g.nactive(),0);
    }

    #[test]
    fn graph_from_gallery_edges(){
        let a = from_edges::<f64>(4,&[(0,1),(1,2),(2,3),(3,0),(0,1)]);
        let g = EliminationGraph::new(&a).unwrap();
        for i in 0..4{
            assert_eq!(g.degree(i),2);
        }
    }
}
